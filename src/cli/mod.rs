mod config_cmd;
mod init;
mod plan;

pub use config_cmd::run_config;
pub use init::run_init;
pub use plan::run_plan;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tripcraft")]
#[command(author, version, about = "Generate day-by-day travel itineraries with Gemini")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (can repeat: -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log format: text (default) or json
    #[arg(long, value_name = "FORMAT", global = true)]
    pub log_format: Option<String>,

    /// Use alternate config file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in travel preferences and generate an itinerary
    Plan(PlanArgs),

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Form fields; any left out are asked for interactively
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Where to travel, e.g. "Paris, France"
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Number of days
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Interests and activities, e.g. "museums, hiking, local cuisine"
    #[arg(short, long)]
    pub interests: Option<String>,

    /// Budget, e.g. "Budget-friendly", "Mid-range", "Luxury", "$100/day"
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Print the itinerary as JSON instead of day cards
    #[arg(long)]
    pub json: bool,

    /// Print the prompt that would be sent and exit without calling the API
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config (secrets redacted)
    Show,

    /// Validate config file
    Validate,

    /// Print config file path
    Path,
}
