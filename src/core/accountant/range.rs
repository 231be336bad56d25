use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::day::summarize_day;
use crate::models::day_summary::DaySummary;

/// Summarize every distinct date present in the log. Dates with no swipes are
/// simply absent; consumers treat a missing entry as "no data".
pub fn summarize_range(
    swipes: &[NaiveDateTime],
    goal: TimeDelta,
    now: NaiveDateTime,
) -> BTreeMap<NaiveDate, DaySummary> {
    let dates: BTreeSet<NaiveDate> = swipes.iter().map(|t| t.date()).collect();

    dates
        .into_iter()
        .map(|date| (date, summarize_day(swipes, date, goal, now)))
        .collect()
}
