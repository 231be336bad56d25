use crate::errors::AppResult;
use crate::store::SwipeStore;
use crate::utils::date::{first_of_month, first_of_next_month};
use chrono::NaiveTime;

pub struct ClearLogic;

impl ClearLogic {
    /// Delete every swipe falling inside the given calendar month.
    ///
    /// The window is half-open: `[first of month, first of next month)`.
    /// Returns how many swipes were removed; zero leaves the store untouched.
    pub fn clear_month(store: &SwipeStore, year: i32, month: u32) -> AppResult<usize> {
        let swipes = store.load();

        let month_start = first_of_month(year, month).and_time(NaiveTime::MIN);
        let month_end = first_of_next_month(year, month).and_time(NaiveTime::MIN);

        let kept: Vec<_> = swipes
            .iter()
            .copied()
            .filter(|t| *t < month_start || *t >= month_end)
            .collect();

        let removed = swipes.len() - kept.len();
        if removed > 0 {
            store.save(&kept)?;
        }

        Ok(removed)
    }

    /// Delete the entire store file.
    pub fn clear_all(store: &SwipeStore) -> AppResult<()> {
        store.remove()
    }
}
