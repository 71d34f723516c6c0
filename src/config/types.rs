use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub defaults: PreferenceDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Command to execute to retrieve the API key; takes precedence over the env var
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_command: Option<String>,
    /// 0 leaves the HTTP client's default in place
    #[serde(default)]
    pub timeout_seconds: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            api_key_command: None,
            timeout_seconds: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Quiet,
    Normal,
    Verbose,
}

impl LogLevel {
    /// Filter directive used when neither RUST_LOG nor -v is given
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "warn",
            LogLevel::Normal => "info",
            LogLevel::Verbose => "debug",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Values pre-filled into the plan form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceDefaults {
    #[serde(default = "default_days")]
    pub days: i64,
    #[serde(default = "default_budget")]
    pub budget: String,
}

fn default_days() -> i64 {
    3
}

fn default_budget() -> String {
    "Mid-range".to_string()
}

impl Default for PreferenceDefaults {
    fn default() -> Self {
        PreferenceDefaults {
            days: default_days(),
            budget: default_budget(),
        }
    }
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<Vec<String>, Vec<String>> {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        if self.gemini.model.trim().is_empty() {
            errors.push("Gemini model is required".to_string());
        }
        if !(0.0..=2.0).contains(&self.gemini.temperature) {
            errors.push(format!(
                "Temperature must be between 0.0 and 2.0 (got {})",
                self.gemini.temperature
            ));
        }
        if let Err(e) = url::Url::parse(&self.gemini.base_url) {
            errors.push(format!("Invalid base_url '{}': {}", self.gemini.base_url, e));
        }
        if self.gemini.api_key_env.trim().is_empty() && self.gemini.api_key_command.is_none() {
            warnings.push("No api_key_env or api_key_command set; falling back to GEMINI_API_KEY".to_string());
        }

        if self.defaults.days < 1 {
            errors.push("Default number of days must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(errors)
        }
    }
}
