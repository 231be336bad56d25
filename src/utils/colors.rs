/// ANSI color helper utilities for terminal output.
use crate::models::day_status::DayStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Day-cell palette for the month view:
/// met → green, not met → red, incomplete → yellow, no data → grey.
pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::GoalMet => GREEN,
        DayStatus::GoalNotMet => RED,
        DayStatus::Incomplete => YELLOW,
        DayStatus::NoData => GREY,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
