//! Time utilities: parsing explicit instants, end-of-day capping.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Last representable instant of a calendar date (23:59:59.999). A forgotten
/// clock-out on a past day is closed here rather than spilling into the next
/// day or into "now".
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
}
