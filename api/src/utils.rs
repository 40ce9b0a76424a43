use chrono::NaiveDate;
use common::{DAY_FORMAT, MONTH_FORMAT};

/// Parses a `YYYY-MM-DD` day key. Only the canonical zero-padded form is
/// accepted; chrono alone also takes `2024-3-1`, signs and leading spaces.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, DAY_FORMAT).ok()?;
    (day_key(date) == s).then_some(date)
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_FORMAT).to_string()
}
