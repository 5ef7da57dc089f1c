use chrono::NaiveDate;
use js_sys::Date;

/// Current month in the "YYYY-MM" form the month selector and the
/// statistics endpoint use.
pub fn current_month() -> String {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1;

    format!("{:04}-{:02}", year as u32, month as u32)
}

/// Today's date in "YYYY-MM-DD" form.
pub fn today() -> String {
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1;
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// True when the string is a real calendar date in "YYYY-MM-DD" form.
pub fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_calendar_dates() {
        assert!(is_valid_date("2024-03-05"));
        assert!(is_valid_date("2024-02-29"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-13-01"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("2024-03"));
        assert!(!is_valid_date("05/03/2024"));
        assert!(!is_valid_date("yesterday"));
    }
}
