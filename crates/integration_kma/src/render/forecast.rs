use chrono::NaiveDate;
use domain::{DaySelection, day_label};

use super::{NO_DATA, hhmm, is_no_precipitation, millimetres, ymd};
use crate::models::{ForecastRecord, ForecastSlot, PrecipitationType, SkyCondition};

/// Slots shown by the ultra-short forecast
const ULTRA_SHORT_SLOTS: usize = 6;

/// Render the six-hour forecast
#[must_use]
pub fn render_ultra_short(records: &[ForecastRecord]) -> String {
    if records.is_empty() {
        return NO_DATA.to_string();
    }

    let mut lines = vec!["⏱️ 초단기예보 (6시간)".to_string()];

    for slot in ForecastSlot::group(records).iter().take(ULTRA_SHORT_SLOTS) {
        lines.push(format!("\n⏰ {}", hhmm(&slot.time)));

        if let Some(t1h) = slot.get("T1H") {
            lines.push(format!("  🌡️  {t1h}°C"));
        }
        push_sky_and_type(&mut lines, slot);
        if let Some(rn1) = slot.get("RN1").filter(|v| !is_no_precipitation(v)) {
            lines.push(format!("  🌧️  강수량: {}", millimetres(rn1)));
        }
        if let Some(reh) = slot.get("REH") {
            lines.push(format!("  💧 습도: {reh}%"));
        }
    }

    lines.join("\n")
}

/// Render the three-day forecast for the selected day(s)
///
/// `today` is the current KST date; day offsets and labels are relative
/// to it.
#[must_use]
pub fn render_short_term(
    records: &[ForecastRecord],
    days: DaySelection,
    today: NaiveDate,
) -> String {
    if records.is_empty() {
        return NO_DATA.to_string();
    }

    let slots = ForecastSlot::group(records);

    let (mut lines, selected): (Vec<String>, Vec<&ForecastSlot>) = match days.target_date(today)
    {
        None => (
            vec!["📆 단기예보 (전체)".to_string()],
            slots.iter().collect(),
        ),
        Some(target) => {
            let key = target.format("%Y%m%d").to_string();
            let label = day_label((target - today).num_days());
            (
                vec![format!("📆 단기예보 ({label}, {})", target.format("%Y-%m-%d"))],
                slots.iter().filter(|slot| slot.date == key).collect(),
            )
        },
    };

    if selected.is_empty() {
        lines.push("\n해당 날짜의 예보 데이터가 없습니다.".to_string());
        return lines.join("\n");
    }

    let mut current_date: Option<&str> = None;
    for slot in selected {
        if days == DaySelection::All && current_date != Some(slot.date.as_str()) {
            current_date = Some(slot.date.as_str());
            lines.push(date_header(&slot.date, today));
        }

        lines.push(format!("\n⏰ {}", hhmm(&slot.time)));

        if let Some(tmp) = slot.get("TMP") {
            lines.push(format!("  🌡️  {tmp}°C"));
        }
        push_sky_and_type(&mut lines, slot);
        if let Some(pop) = slot.get("POP") {
            lines.push(format!("  🌧️  강수확률: {pop}%"));
        }
        if let Some(pcp) = slot.get("PCP").filter(|v| !is_no_precipitation(v)) {
            lines.push(format!("  💧 강수량: {pcp}"));
        }
    }

    lines.join("\n")
}

fn push_sky_and_type(lines: &mut Vec<String>, slot: &ForecastSlot) {
    if let Some(sky) = slot.get("SKY") {
        lines.push(format!("  ☁️  {}", SkyCondition::from_code(sky)));
    }
    if let Some(pty) = slot.get("PTY").filter(|code| *code != "0") {
        lines.push(format!("  ☔ {}", PrecipitationType::from_code(pty)));
    }
}

fn date_header(date: &str, today: NaiveDate) -> String {
    match NaiveDate::parse_from_str(date, "%Y%m%d") {
        Ok(day) => format!(
            "\n📅 {} ({})",
            ymd(date),
            day_label((day - today).num_days())
        ),
        Err(_) => format!("\n📅 {}", ymd(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fcst(date: &str, time: &str, category: &str, value: &str) -> ForecastRecord {
        ForecastRecord {
            base_date: "20260201".to_string(),
            base_time: "0500".to_string(),
            category: category.to_string(),
            fcst_date: date.to_string(),
            fcst_time: time.to_string(),
            fcst_value: value.to_string(),
            nx: 60,
            ny: 127,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
    }

    fn three_days() -> Vec<ForecastRecord> {
        vec![
            fcst("20260202", "0900", "TMP", "-1"),
            fcst("20260202", "0900", "SKY", "4"),
            fcst("20260202", "0900", "PTY", "3"),
            fcst("20260202", "0900", "POP", "60"),
            fcst("20260202", "0900", "PCP", "강수없음"),
            fcst("20260201", "1800", "TMP", "2"),
            fcst("20260201", "1800", "SKY", "1"),
            fcst("20260201", "1800", "PTY", "0"),
            fcst("20260203", "0000", "TMP", "-5"),
            fcst("20260203", "0000", "PCP", "1.0mm"),
        ]
    }

    #[test]
    fn ultra_short_limits_to_six_slots() {
        let records: Vec<ForecastRecord> = (0..8)
            .map(|h| fcst("20260201", &format!("{:02}00", 10 + h), "T1H", "5"))
            .collect();
        let text = render_ultra_short(&records);
        assert_eq!(text.matches("⏰").count(), 6);
        assert!(text.contains("⏰ 15:00"));
        assert!(!text.contains("⏰ 16:00"));
    }

    #[test]
    fn ultra_short_slot_lines() {
        let records = vec![
            fcst("20260201", "1500", "REH", "70"),
            fcst("20260201", "1500", "RN1", "1mm 미만"),
            fcst("20260201", "1500", "PTY", "4"),
            fcst("20260201", "1500", "SKY", "3"),
            fcst("20260201", "1500", "T1H", "4"),
            fcst("20260201", "1600", "RN1", "강수없음"),
        ];
        let expected = [
            "⏱️ 초단기예보 (6시간)",
            "\n⏰ 15:00",
            "  🌡️  4°C",
            "  ☁️  구름많음",
            "  ☔ 소나기",
            "  🌧️  강수량: 1mm 미만",
            "  💧 습도: 70%",
            "\n⏰ 16:00",
        ]
        .join("\n");
        assert_eq!(render_ultra_short(&records), expected);
    }

    #[test]
    fn short_term_single_day() {
        let text = render_short_term(&three_days(), DaySelection::Offset(1), today());
        let expected = [
            "📆 단기예보 (내일, 2026-02-02)",
            "\n⏰ 09:00",
            "  🌡️  -1°C",
            "  ☁️  흐림",
            "  ☔ 눈",
            "  🌧️  강수확률: 60%",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn short_term_all_days_has_date_headers() {
        let text = render_short_term(&three_days(), DaySelection::All, today());
        assert!(text.starts_with("📆 단기예보 (전체)"));
        assert!(text.contains("\n📅 2026-02-01 (오늘)"));
        assert!(text.contains("\n📅 2026-02-02 (내일)"));
        assert!(text.contains("\n📅 2026-02-03 (모레)"));
        assert!(text.contains("  💧 강수량: 1.0mm"));
        assert_eq!(text.matches("📅").count(), 3);

        let today_pos = text.find("(오늘)").expect("today header");
        let tomorrow_pos = text.find("(내일)").expect("tomorrow header");
        assert!(today_pos < tomorrow_pos);
    }

    #[test]
    fn short_term_day_without_data() {
        let text = render_short_term(&three_days(), DaySelection::Offset(5), today());
        assert_eq!(
            text,
            "📆 단기예보 (5일 후, 2026-02-06)\n\n해당 날짜의 예보 데이터가 없습니다."
        );
    }

    #[test]
    fn empty_records() {
        assert_eq!(render_ultra_short(&[]), "No data available");
        assert_eq!(
            render_short_term(&[], DaySelection::All, today()),
            "No data available"
        );
    }
}
