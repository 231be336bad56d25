use chrono::{NaiveDate, TimeDelta};

use super::day_status::DayStatus;
use super::session::Session;

/// Derived accounting for a single calendar date.
///
/// Always recomputed from the raw swipe list; never cached across goal
/// changes or store edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
    /// Sum of session durations, including the open-session portion when the
    /// day ends on an unmatched IN. Never negative.
    pub total: TimeDelta,
    /// The date holds an odd number of swipes. Odd count dominates: a day
    /// with complete pairs followed by a dangling IN is still incomplete.
    pub is_incomplete: bool,
    /// `total >= goal` for the goal the summary was computed with.
    pub goal_met: bool,
    /// Pairs whose clock-out preceded the clock-in. Skipped, not negated.
    pub invalid_pairs: usize,
}

impl DaySummary {
    pub fn status(&self) -> DayStatus {
        if self.is_incomplete {
            DayStatus::Incomplete
        } else if self.total <= TimeDelta::zero() {
            DayStatus::NoData
        } else if self.goal_met {
            DayStatus::GoalMet
        } else {
            DayStatus::GoalNotMet
        }
    }
}
