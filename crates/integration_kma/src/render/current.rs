use std::collections::HashMap;

use super::{NO_DATA, is_no_precipitation, millimetres};
use crate::models::{ObservationRecord, PrecipitationType, wind_direction};

/// Render current observations
#[must_use]
pub fn render_current(records: &[ObservationRecord]) -> String {
    if records.is_empty() {
        return NO_DATA.to_string();
    }

    let values: HashMap<&str, &str> = records
        .iter()
        .map(|r| (r.category.as_str(), r.obsr_value.as_str()))
        .collect();

    let mut lines = vec!["🌤️ 현재 날씨 (초단기실황)".to_string()];

    if let Some(t1h) = values.get("T1H") {
        lines.push(format!("🌡️  기온: {t1h}°C"));
    }
    if let Some(reh) = values.get("REH") {
        lines.push(format!("💧 습도: {reh}%"));
    }
    if let Some(rn1) = values.get("RN1") {
        let amount = if is_no_precipitation(rn1) {
            "0mm".to_string()
        } else {
            millimetres(rn1)
        };
        lines.push(format!("🌧️  강수량: {amount} (1시간)"));
    }
    if let Some(wsd) = values.get("WSD") {
        lines.push(format!("💨 풍속: {wsd}m/s"));
    }
    if let Some(vec) = values.get("VEC") {
        lines.push(format!("🧭 풍향: {} ({vec}°)", wind_direction(vec)));
    }
    if let Some(pty) = values.get("PTY").filter(|code| **code != "0") {
        lines.push(format!("☔ 강수형태: {}", PrecipitationType::from_code(pty)));
    }

    lines.join("\n")
}
