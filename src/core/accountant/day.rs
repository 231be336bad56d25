use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::sessions::build_sessions;
use crate::models::day_summary::DaySummary;
use crate::models::session::SessionClosure;

/// Summarize one calendar date from the raw swipe log.
///
/// Swipes are selected by date component and sorted ascending before pairing
/// (the store is expected to hold insertion order, but out-of-order data must
/// not break the arithmetic).
pub fn summarize_day(
    swipes: &[NaiveDateTime],
    date: NaiveDate,
    goal: TimeDelta,
    now: NaiveDateTime,
) -> DaySummary {
    let mut day_swipes: Vec<NaiveDateTime> =
        swipes.iter().copied().filter(|t| t.date() == date).collect();
    day_swipes.sort_unstable();

    let sessions = build_sessions(&day_swipes, date, now);

    let total = sessions
        .iter()
        .fold(TimeDelta::zero(), |acc, s| acc + s.duration);
    let invalid_pairs = sessions
        .iter()
        .filter(|s| s.closure == SessionClosure::Invalid)
        .count();

    DaySummary {
        date,
        sessions,
        total,
        is_incomplete: day_swipes.len() % 2 != 0,
        goal_met: total >= goal,
        invalid_pairs,
    }
}
