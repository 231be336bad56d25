use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::swipe::SwipeLogic;
use crate::errors::{AppError, AppResult};
use crate::store::SwipeStore;
use crate::ui::messages::success;
use crate::utils::formatting::{clock2readable, date2readable};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_date_time;

/// Record one swipe. The direction (IN/OUT) is not an input: it falls out of
/// the log's parity after the append.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Swipe { at } = cmd {
        let instant = match at {
            Some(s) => {
                parse_date_time(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))?
            }
            None => chrono::Local::now().naive_local(),
        };

        let store = SwipeStore::new(expand_tilde(&cfg.store));
        let outcome = SwipeLogic::apply(&store, instant)?;

        let direction = if outcome.swiped_in { "IN" } else { "OUT" };
        success(format!(
            "Swiped {} at {} on {}",
            direction,
            clock2readable(outcome.recorded_at, cfg.clock_24h),
            date2readable(outcome.recorded_at.date()),
        ));
    }

    Ok(())
}
