/// Render classification for a calendar day.
///
/// `NoData` and `GoalNotMet` are distinguished only here, at the render
/// boundary; the underlying totals are identical (zero vs. short of goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    NoData,
    Incomplete,
    GoalMet,
    GoalNotMet,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NoData => "No time recorded",
            DayStatus::Incomplete => "Incomplete (no clock-out)",
            DayStatus::GoalMet => "Goal met",
            DayStatus::GoalNotMet => "Goal not met",
        }
    }
}
