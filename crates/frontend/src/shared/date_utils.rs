//! Date helpers for the month filters and table display.

use chrono::{Datelike, Utc};

/// Current month as the `YYYY-MM` value of an `<input type="month">`.
pub fn current_month() -> String {
    let today = Utc::now().date_naive();
    format!("{:04}-{:02}", today.year(), today.month())
}

/// Display form of an ISO date, with datetime suffixes dropped.
/// `2024-03-15T14:02:26` -> `2024-03-15`; anything else passes through.
pub fn format_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_strips_time() {
        assert_eq!(format_date("2024-03-15T14:02:26"), "2024-03-15");
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_format_date_passes_through_garbage() {
        assert_eq!(format_date("ayer"), "ayer");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_current_month_shape() {
        let m = current_month();
        assert_eq!(m.len(), 7);
        assert_eq!(&m[4..5], "-");
    }
}
