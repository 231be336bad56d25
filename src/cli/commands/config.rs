use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Config { print_config, goal } = cmd {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{}", yaml);
        }

        // ---- SET GOAL ----
        if let Some(raw) = goal {
            let hours: f64 = raw
                .parse()
                .map_err(|_| AppError::InvalidGoal(raw.clone()))?;

            // Re-read the file so a --store override on this invocation is
            // not written into the persisted config.
            let mut on_disk = Config::load();
            on_disk.set_goal(hours)?;

            if !is_test {
                on_disk.save()?;
            }

            success(format!(
                "Office hours goal updated successfully ({:.2} hours)",
                hours
            ));
        }
    }

    Ok(())
}
