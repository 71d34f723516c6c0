use crate::config::{self, Config};
use crate::error::Result;
use crate::ui;
use std::path::Path;

/// Run the init command
pub fn run_init(force: bool, config_override: Option<&Path>) -> Result<()> {
    let config_path = config::config_path(config_override)?;

    // Check if config already exists
    if config_path.exists() && !force {
        let overwrite = ui::is_interactive()
            && ui::prompt_confirm(
                &format!("Config file already exists at {}. Overwrite?", config_path.display()),
                false,
            )?;
        if !overwrite {
            ui::print_warning(&format!(
                "Config file already exists at {}",
                config_path.display()
            ));
            ui::print_info("Use --force to overwrite");
            return Ok(());
        }
    }

    let config = Config::default();
    config::save_config_to(&config, &config_path)?;

    ui::print_success(&format!(
        "Created config file at {}",
        config_path.display()
    ));
    ui::print_info(&format!(
        "Export your Gemini API key as {} before running `tripcraft plan`",
        config.gemini.api_key_env
    ));

    Ok(())
}
