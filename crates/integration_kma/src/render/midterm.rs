use super::{NO_DATA, ymd_hm};
use crate::models::MidtermRecord;

/// Render a mid-term forecast
///
/// The service returns one record per station; only the first is shown.
#[must_use]
pub fn render_midterm(records: &[MidtermRecord]) -> String {
    let Some(record) = records.first() else {
        return NO_DATA.to_string();
    };

    let mut lines = vec!["📅 중기예보".to_string()];
    if let Some(tm_fc) = &record.tm_fc {
        lines.push(format!("발표시각: {}", ymd_hm(tm_fc)));
    }
    lines.push(String::new());
    lines.push(
        record
            .wf_sv
            .clone()
            .unwrap_or_else(|| "Error: No forecast text (wfSv) in response".to_string()),
    );

    lines.join("\n")
}
