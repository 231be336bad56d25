use chrono::NaiveDateTime;

use super::day_summary::DaySummary;

/// Snapshot of the current day plus the global in/out toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayStatus {
    pub summary: DaySummary,
    /// Parity of the whole log, not just today's swipes. A forgotten
    /// clock-out on a previous day keeps the toggle flipped until the next
    /// swipe, wherever it lands.
    pub is_inside: bool,
    /// Most recently recorded swipe, in insertion order.
    pub last_swipe: Option<NaiveDateTime>,
}

impl TodayStatus {
    /// True while today ends on an unmatched IN. Drives the one-second
    /// refresh loop in watch mode.
    pub fn has_active_session(&self) -> bool {
        self.summary.sessions.last().is_some_and(|s| s.is_active())
    }
}
