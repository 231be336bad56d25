use clap::{Parser, Subcommand};

/// Command-line interface definition for swipetrack
#[derive(Parser)]
#[command(
    name = "swipetrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record swipe in/out times and track a daily office-hours goal",
    long_about = None
)]
pub struct Cli {
    /// Override swipe store path (useful for tests or custom locations)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and swipe store
    Init,

    /// Manage the configuration file (view it, or change the office-hours goal)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "goal",
            value_name = "HOURS",
            help = "Set the daily office-hours goal in hours (e.g. 7.5)"
        )]
        goal: Option<String>,
    },

    /// Record a swipe; each call toggles between IN and OUT
    Swipe {
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Record at an explicit instant (YYYY-MM-DD HH:MM[:SS]) instead of now"
        )]
        at: Option<String>,
    },

    /// Show today's progress toward the office-hours goal
    Status {
        #[arg(
            long = "watch",
            help = "Redraw every second while a session is open today"
        )]
        watch: bool,
    },

    /// Show the recorded sessions for a single day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Render a calendar of daily goal results for a month
    Month {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,
    },

    /// Delete recorded swipes: one month, or everything
    Clear {
        #[arg(
            long = "month",
            value_name = "YYYY-MM",
            help = "Delete all swipes recorded in the given month"
        )]
        month: Option<String>,

        #[arg(
            long = "all",
            conflicts_with = "month",
            help = "Delete the entire swipe store"
        )]
        all: bool,
    },
}
