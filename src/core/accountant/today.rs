use chrono::{NaiveDateTime, TimeDelta};

use super::day::summarize_day;
use crate::models::today_status::TodayStatus;

/// Today's summary plus the global in/out toggle.
///
/// The toggle is the parity of the entire log, not of today's slice: a
/// session can start on one day and stay open while later swipes accrue, so
/// only the full count says whether the user is currently inside.
pub fn classify_today(
    swipes: &[NaiveDateTime],
    goal: TimeDelta,
    now: NaiveDateTime,
) -> TodayStatus {
    TodayStatus {
        summary: summarize_day(swipes, now.date(), goal, now),
        is_inside: swipes.len() % 2 != 0,
        last_swipe: swipes.last().copied(),
    }
}
