use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty swipe store
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("Initializing swipetrack…");

    Config::init_all(cli.store.clone(), cli.test)?;

    success("swipetrack initialization completed");
    Ok(())
}
