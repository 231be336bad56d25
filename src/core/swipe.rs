use chrono::NaiveDateTime;

use crate::errors::AppResult;
use crate::store::SwipeStore;

/// Outcome of recording a swipe: the instant written and the direction the
/// toggle ended up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub recorded_at: NaiveDateTime,
    pub swiped_in: bool,
}

pub struct SwipeLogic;

impl SwipeLogic {
    /// Append one swipe through a load-modify-save cycle.
    ///
    /// Whether it counts as IN or OUT is not stored; it falls out of the
    /// log's parity after the append.
    pub fn apply(store: &SwipeStore, at: NaiveDateTime) -> AppResult<SwipeOutcome> {
        let mut swipes = store.load();
        swipes.push(at);
        store.save(&swipes)?;

        Ok(SwipeOutcome {
            recorded_at: at,
            swiped_in: swipes.len() % 2 != 0,
        })
    }
}
