//! swipetrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cli.test),
        Commands::Swipe { .. } => cli::commands::swipe::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once per invocation.
    let mut cfg = Config::load();

    // Apply a store override from the command line, if any.
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    dispatch(&cli, &cfg)
}
