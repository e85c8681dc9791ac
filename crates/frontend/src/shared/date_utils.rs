//! Browser clock and date formatting helpers

use chrono::{NaiveDate, NaiveDateTime};

/// Local wall-clock time of the browser
pub fn now_local() -> NaiveDateTime {
    let d = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
        .and_then(|date| date.and_hms_milli_opt(d.get_hours(), d.get_minutes(), d.get_seconds(), d.get_milliseconds()))
        .unwrap_or_default()
}

pub fn today() -> NaiveDate {
    now_local().date()
}

/// Milliseconds since the epoch, for stopwatches
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Value of an `<input type="date">`; empty or malformed is `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// `dd/mm/yyyy` for tables, a dash placeholder when missing
pub fn format_ymd(year: Option<i32>, month: Option<i32>, day: Option<i32>) -> String {
    match (year, month) {
        (Some(y), Some(m)) => match day {
            Some(d) => format!("{:02}/{:02}/{}", d, m, y),
            None => format!("{:02}/{}", m, y),
        },
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_round_trip() {
        let d = parse_date_input("2024-03-15").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(format_date_input(Some(d)), "2024-03-15");
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15/03/2024"), None);
        assert_eq!(format_date_input(None), "");
    }

    #[test]
    fn table_dates() {
        assert_eq!(format_ymd(Some(2024), Some(3), Some(5)), "05/03/2024");
        assert_eq!(format_ymd(Some(2024), Some(11), None), "11/2024");
        assert_eq!(format_ymd(None, Some(3), Some(5)), "—");
    }
}
