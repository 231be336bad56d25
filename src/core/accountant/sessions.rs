use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::models::session::{Session, SessionClosure};
use crate::utils::time::end_of_day;

/// Pair a single date's swipes into sessions: index 0 with 1, 2 with 3, and
/// so on, in the order given.
///
/// `day_swipes` must already be filtered to `date`. A trailing unmatched IN
/// becomes either a capped session (past date, closed at the last instant of
/// that date) or an active one (today or later, measured against `now`).
/// A pair whose clock-out precedes its clock-in is kept in the list as
/// `Invalid` with zero duration so the caller can surface it.
pub fn build_sessions(
    day_swipes: &[NaiveDateTime],
    date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<Session> {
    let mut sessions = Vec::new();

    let mut i = 0;
    while i < day_swipes.len() {
        let clock_in = day_swipes[i];

        if i + 1 < day_swipes.len() {
            let clock_out = day_swipes[i + 1];
            let delta = clock_out - clock_in;

            if delta < TimeDelta::zero() {
                sessions.push(Session {
                    clock_in,
                    clock_out: Some(clock_out),
                    duration: TimeDelta::zero(),
                    closure: SessionClosure::Invalid,
                });
            } else {
                sessions.push(Session {
                    clock_in,
                    clock_out: Some(clock_out),
                    duration: delta,
                    closure: SessionClosure::Complete,
                });
            }
        } else if date < now.date() {
            // Forgotten clock-out on a past day: cap at the end of that date
            // instead of letting the session spill into the next day.
            sessions.push(Session {
                clock_in,
                clock_out: None,
                duration: end_of_day(date) - clock_in,
                closure: SessionClosure::CappedAtMidnight,
            });
        } else {
            // Open session, still growing. Clamped at zero so a swipe ahead
            // of `now` can never drive the total negative.
            sessions.push(Session {
                clock_in,
                clock_out: None,
                duration: (now - clock_in).max(TimeDelta::zero()),
                closure: SessionClosure::Active,
            });
        }

        i += 2;
    }

    sessions
}
