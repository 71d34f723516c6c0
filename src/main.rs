mod cli;
mod config;
mod error;
mod gemini;
mod itinerary;
mod render;
mod session;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogFormat, Settings};
use error::{ExitStatus, TripcraftError};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ui::set_quiet_mode(cli.quiet);

    let config = config::load_config(cli.config.as_deref());

    // Set up logging based on verbosity, falling back to the config file
    let settings = config
        .as_ref()
        .map(|c| c.settings.clone())
        .unwrap_or_default();
    setup_logging(cli.verbose, cli.quiet, cli.log_format.as_deref(), &settings);

    match run_command(cli, config).await {
        Ok(status) => status.into(),
        Err(e) => {
            ui::print_error(&e.to_string());
            e.exit_status().into()
        }
    }
}

/// `init` and `config path` run even when the config file cannot be loaded
async fn run_command(cli: Cli, config: error::Result<Config>) -> Result<ExitStatus, TripcraftError> {
    let config_override = cli.config.as_deref();

    match cli.command {
        Some(Commands::Plan(args)) => cli::run_plan(args, &config?).await,

        Some(Commands::Init { force }) => {
            cli::run_init(force, config_override)?;
            Ok(ExitStatus::Success)
        }

        Some(Commands::Config { command }) => {
            cli::run_config(command, config, config_override)?;
            Ok(ExitStatus::Success)
        }

        None => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help().ok();
            Ok(ExitStatus::Success)
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool, format: Option<&str>, settings: &Settings) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => settings.log_level.as_filter(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let json = match format {
        Some(f) => f.eq_ignore_ascii_case("json"),
        None => settings.log_format == LogFormat::Json,
    };

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().without_time().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
