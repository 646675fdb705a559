use super::ymd_hm;
use crate::models::WarningRecord;

const NO_WARNINGS: &str = "✅ 현재 발효 중인 기상특보가 없습니다.";
/// Section body the service sends when nothing is in effect
const NONE_MARKER: &str = "o 없음";

/// Render the nationwide warning status
#[must_use]
pub fn render_warnings(records: &[WarningRecord]) -> String {
    let Some(record) = records.first() else {
        return NO_WARNINGS.to_string();
    };

    let mut lines = vec!["🚨 기상특보 현황".to_string()];
    if let Some(tm_fc) = &record.tm_fc {
        lines.push(format!("발표시각: {}", ymd_hm(&pad_stamp(tm_fc))));
    }
    if let Some(tm_ef) = &record.tm_ef {
        lines.push(format!("발효시각: {}", ymd_hm(&pad_stamp(tm_ef))));
    }
    lines.push(String::new());

    push_section(&mut lines, "📍 현재 발효 중인 특보", record.t6.as_deref());
    push_section(&mut lines, "⚠️  예비특보", record.t7.as_deref());

    if let Some(other) = non_empty(record.other.as_deref()) {
        let other = other.trim();
        if !other.is_empty() && other != NONE_MARKER {
            lines.push("ℹ️  기타".to_string());
            lines.extend(bullets(other));
        }
    }

    lines.join("\n")
}

/// Sections always print a header once present, even if nothing is in effect
fn push_section(lines: &mut Vec<String>, title: &str, content: Option<&str>) {
    let Some(content) = non_empty(content) else {
        return;
    };

    lines.push(title.to_string());
    let content = content.trim();
    if content.is_empty() || content == NONE_MARKER {
        lines.push("  ✅ 없음".to_string());
    } else {
        lines.extend(bullets(content));
    }
    lines.push(String::new());
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Entries are introduced by `o `
fn bullets(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split("o ")
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && *entry != "없음")
        .map(|entry| format!("  • {entry}"))
}

/// Left-pad a numeric stamp to 12 digits
fn pad_stamp(stamp: &str) -> String {
    format!("{stamp:0>12}")
}
