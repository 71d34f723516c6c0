use crate::itinerary::ResponseFailure;
use std::process::ExitCode;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    GeneralError = 1,
    ValidationFailed = 2,
    RemoteFailed = 3,
    ResponseInvalid = 4,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Errors raised while generating an itinerary. The Display text of each
/// variant is shown to the user as-is.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Number of days must be greater than 0.")]
    InvalidDays,

    #[error("The Gemini API key is not configured. Please set the {0} environment variable.")]
    MissingApiKey(String),

    #[error("Invalid Gemini API key. Please check your {0} environment variable.")]
    InvalidApiKey(String),

    #[error("You have exceeded your Gemini API quota. Please check your usage and limits.")]
    QuotaExceeded,

    #[error("Failed to generate the itinerary. {0}")]
    Generation(String),

    #[error("Failed to parse the itinerary from the Gemini response, or the response was malformed.")]
    ResponseParse(#[source] ResponseFailure),
}

impl PlannerError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            PlannerError::InvalidDays => ExitStatus::ValidationFailed,
            PlannerError::MissingApiKey(_) => ExitStatus::GeneralError,
            PlannerError::InvalidApiKey(_)
            | PlannerError::QuotaExceeded
            | PlannerError::Generation(_) => ExitStatus::RemoteFailed,
            PlannerError::ResponseParse(_) => ExitStatus::ResponseInvalid,
        }
    }
}

#[derive(Error, Debug)]
pub enum TripcraftError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found at {0}")]
    ConfigNotFound(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl TripcraftError {
    /// Convert error to appropriate exit status
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            TripcraftError::Validation(_) => ExitStatus::ValidationFailed,
            TripcraftError::Planner(e) => e.exit_status(),
            TripcraftError::Config(_)
            | TripcraftError::ConfigNotFound(_)
            | TripcraftError::ConfigInvalid(_)
            | TripcraftError::Io(_)
            | TripcraftError::TomlParse(_)
            | TripcraftError::TomlSerialize(_)
            | TripcraftError::Json(_)
            | TripcraftError::UserCancelled => ExitStatus::GeneralError,
        }
    }
}

pub type Result<T> = std::result::Result<T, TripcraftError>;
