mod types;

pub use types::*;

use crate::error::{Result, TripcraftError};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Checked after the configured variable when that one is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Get the XDG-compliant config directory
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "tripcraft")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TripcraftError::Config("Could not determine config directory".to_string()))
}

/// Get the config file path, honouring an explicit override
pub fn config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(config_dir()?.join("config.toml")),
    }
}

/// Load config; a missing default file yields built-in defaults,
/// a missing explicit file is an error
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = config_path(override_path)?;
    if !path.exists() {
        if override_path.is_some() {
            return Err(TripcraftError::ConfigNotFound(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    load_config_from(&path)
}

/// Load config from a specific path
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(TripcraftError::ConfigNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Save config to a specific path
pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Look up the API key from the process environment.
/// Absence is logged here and reported to the user only when a plan is submitted.
pub fn resolve_api_key(config: &GeminiConfig) -> Option<String> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

/// Resolve the API key with an injectable variable lookup
pub fn resolve_api_key_with<F>(config: &GeminiConfig, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(ref command) = config.api_key_command {
        match run_key_command(command) {
            Ok(key) => return Some(key),
            Err(e) => tracing::warn!(error = %e, "API key command failed"),
        }
    }

    let mut names = vec![config.api_key_env.as_str()];
    if config.api_key_env != FALLBACK_API_KEY_ENV {
        names.push(FALLBACK_API_KEY_ENV);
    }

    let key = names
        .into_iter()
        .filter(|name| !name.is_empty())
        .find_map(|name| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()));

    if key.is_none() {
        tracing::warn!(
            env = %config.api_key_env,
            "Gemini API key not found in the environment; set it before generating an itinerary"
        );
    }
    key
}

/// Execute the key command and return its trimmed output
fn run_key_command(command: &str) -> Result<String> {
    let output = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", command]).output()
    } else {
        Command::new("sh").args(["-c", command]).output()
    };

    let output = output
        .map_err(|e| TripcraftError::Config(format!("Failed to execute API key command: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TripcraftError::Config(format!(
            "API key command failed: {}",
            stderr.trim()
        )));
    }

    let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if key.is_empty() {
        return Err(TripcraftError::Config(
            "API key command returned empty output".to_string(),
        ));
    }
    Ok(key)
}

/// Redact sensitive information from config for display
pub fn redact_config(config: &Config) -> Config {
    let mut redacted = config.clone();
    if redacted.gemini.api_key_command.is_some() {
        redacted.gemini.api_key_command = Some("[REDACTED]".to_string());
    }
    redacted
}
