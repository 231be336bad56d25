use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM" into `(year, month)`.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    NaiveDate::parse_from_str(&(s.to_string() + "-01"), "%Y-%m-%d")
        .ok()
        .map(|d| (d.year(), d.month()))
}

pub fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

pub fn first_of_next_month(year: i32, month: u32) -> NaiveDate {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = first_of_month(year, month);

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

/// Human month label, e.g. "September 2025".
pub fn month_label(year: i32, month: u32) -> String {
    first_of_month(year, month).format("%B %Y").to_string()
}
