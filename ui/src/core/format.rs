//! Formatting helpers for counters and dates shown on the home page.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Compact star count: `25000 -> "25k"`, `1500 -> "1.5k"`, `999 -> "999"`.
///
/// Values in `[1000, 10000)` keep one decimal, so `9999` renders as `"10.0k"`.
pub fn format_star_count(stars: u64) -> String {
    if stars >= 10_000 {
        format!("{}k", stars / 1000)
    } else if stars >= 1000 {
        format!("{:.1}k", stars as f64 / 1000.0)
    } else {
        stars.to_string()
    }
}

/// `2025-05-01T10:00:00Z -> "2025-05-01"`. Unparseable input falls back to the
/// leading date segment, or `None` when there is nothing usable.
pub fn format_created_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        if let Ok(label) = parsed.format(&format_description!("[year]-[month]-[day]")) {
            return Some(label);
        }
    }
    let (date, _) = raw.split_once('T').unwrap_or((raw, ""));
    (!date.is_empty()).then(|| date.to_string())
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
