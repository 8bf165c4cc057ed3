use chrono::{Datelike, NaiveDate};

pub const CERTIFICATE_EARNED: &str = "Certificate earned";
pub const CERTIFICATE_NOT_EARNED: &str = "Certificate not earned";

/// Display period for dated entries: `"2020 - 2022"` or `"2023 - Present"`.
pub fn compute_period(start: NaiveDate, end: Option<NaiveDate>, is_ongoing: bool) -> String {
    match end {
        Some(end) if !is_ongoing => format!("{} - {}", start.year(), end.year()),
        _ => format!("{} - Present", start.year()),
    }
}

pub fn certification_status(earned: bool) -> &'static str {
    if earned {
        CERTIFICATE_EARNED
    } else {
        CERTIFICATE_NOT_EARNED
    }
}
