use chrono::{NaiveDateTime, TimeDelta};

/// One IN/OUT pairing derived from the raw swipe log.
///
/// Sessions are never stored; they are rebuilt from the swipe list on every
/// computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub clock_in: NaiveDateTime,
    pub clock_out: Option<NaiveDateTime>,
    pub duration: TimeDelta,
    pub closure: SessionClosure,
}

/// How a session came to an end, which drives both the duration rule and the
/// way the session is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionClosure {
    /// Paired IN/OUT on the same date.
    Complete,
    /// Unmatched IN on a past date; closed at the last instant of that date.
    CappedAtMidnight,
    /// Unmatched IN today; still accruing against `now`.
    Active,
    /// Clock-out earlier than clock-in. Contributes nothing to the total.
    Invalid,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.closure == SessionClosure::Active
    }
}
