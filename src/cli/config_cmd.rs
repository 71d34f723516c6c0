use crate::cli::ConfigCommands;
use crate::config::{self, Config};
use crate::error::{Result, TripcraftError};
use crate::ui;
use std::path::Path;

/// Run config subcommands
pub fn run_config(command: ConfigCommands, config: Result<Config>, config_override: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Show => show_config(&config?),
        ConfigCommands::Validate => validate_config(&config?),
        ConfigCommands::Path => print_path(config_override),
    }
}

fn show_config(config: &Config) -> Result<()> {
    let redacted = config::redact_config(config);
    let content = toml::to_string_pretty(&redacted)
        .map_err(|e| TripcraftError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("{}", content);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    match config.validate() {
        Ok(warnings) => {
            for warning in warnings {
                ui::print_warning(&warning);
            }
            ui::print_success("Config is valid");
        }
        Err(errors) => {
            for error in errors {
                ui::print_error(&error);
            }
            return Err(TripcraftError::ConfigInvalid("Config validation failed".to_string()));
        }
    }

    if config::resolve_api_key(&config.gemini).is_some() {
        ui::print_success("Gemini API key found");
    } else {
        ui::print_warning(&format!(
            "No Gemini API key found; set {} or api_key_command",
            config.gemini.api_key_env
        ));
    }

    Ok(())
}

fn print_path(config_override: Option<&Path>) -> Result<()> {
    let path = config::config_path(config_override)?;
    println!("{}", path.display());
    Ok(())
}
