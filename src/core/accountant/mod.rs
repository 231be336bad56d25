//! Session accounting over the raw swipe log.
//!
//! Everything here is a pure function of `(swipes, goal, now)`: no I/O, no
//! clocks, no hidden state. Callers supply a consistent snapshot of the log
//! and an explicit `now`, which makes every computation idempotent and safe
//! to repeat on each refresh tick.

pub mod day;
pub mod range;
pub mod sessions;
pub mod today;

pub use day::summarize_day;
pub use range::summarize_range;
pub use sessions::build_sessions;
pub use today::classify_today;
