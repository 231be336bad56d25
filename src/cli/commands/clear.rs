use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::errors::{AppError, AppResult};
use crate::store::SwipeStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{month_label, parse_month};
use crate::utils::path::expand_tilde;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Handle the `clear` command: bulk deletion of a month's swipes or of the
/// whole store. Without flags, lists the months that hold data.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { month, all } = cmd {
        let store = SwipeStore::new(expand_tilde(&cfg.store));

        //
        // Delete everything
        //
        if *all {
            if !ask_confirmation(
                "Are you sure you want to permanently delete ALL time tracking data?",
            ) {
                info("Operation cancelled.");
                return Ok(());
            }

            ClearLogic::clear_all(&store)?;
            success("All data has been permanently deleted");
            return Ok(());
        }

        //
        // Delete one month
        //
        if let Some(m) = month {
            let (year, month_no) =
                parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?;
            let label = month_label(year, month_no);

            if !ask_confirmation(&format!(
                "Are you sure you want to permanently delete all time tracking data for {}?",
                label
            )) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = ClearLogic::clear_month(&store, year, month_no)?;
            if removed == 0 {
                info(format!("No data found for {}", label));
            } else {
                success(format!(
                    "Data for {} has been deleted ({} swipes)",
                    label, removed
                ));
            }
            return Ok(());
        }

        //
        // No flags: list the months that hold data
        //
        let months = store.available_months();
        if months.is_empty() {
            info("No data found to clear");
            return Ok(());
        }

        println!("Months with recorded data:");
        for (year, month_no) in months {
            println!("  {}", month_label(year, month_no));
        }
        println!();
        info("Use `swipetrack clear --month YYYY-MM` or `swipetrack clear --all`.");
    }

    Ok(())
}
