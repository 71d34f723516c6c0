use crate::error::{Result, TripcraftError};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::validator::ValueRequiredValidator;
use inquire::{Confirm, CustomType, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Global quiet mode flag - when true, suppresses non-error output
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable quiet mode globally
pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Prompt for non-empty text input
pub fn prompt_required_text(message: &str, placeholder: &str) -> Result<String> {
    Text::new(message)
        .with_placeholder(placeholder)
        .with_validator(ValueRequiredValidator::default())
        .prompt()
        .map_err(|_| TripcraftError::UserCancelled)
}

/// Prompt for a whole number with a default value
pub fn prompt_number(message: &str, default: i64) -> Result<i64> {
    CustomType::<i64>::new(message)
        .with_default(default)
        .with_error_message("Please type a whole number")
        .prompt()
        .map_err(|_| TripcraftError::UserCancelled)
}

/// Prompt for confirmation
pub fn prompt_confirm(message: &str, default: bool) -> Result<bool> {
    Confirm::new(message)
        .with_default(default)
        .prompt()
        .map_err(|_| TripcraftError::UserCancelled)
}

const OTHER_BUDGET: &str = "Other...";

/// Selection options for budget
pub fn budget_options() -> Vec<&'static str> {
    vec!["Budget-friendly", "Mid-range", "Luxury", OTHER_BUDGET]
}

/// Prompt for a budget, starting on the configured default.
/// Picking "Other..." asks for free text such as "$100/day".
pub fn prompt_budget(default: &str) -> Result<String> {
    let options = budget_options();
    let start = options
        .iter()
        .position(|o| o.eq_ignore_ascii_case(default))
        .unwrap_or(1);

    let selected = Select::new("Budget:", options)
        .with_starting_cursor(start)
        .prompt()
        .map_err(|_| TripcraftError::UserCancelled)?;

    if selected == OTHER_BUDGET {
        prompt_required_text("Describe your budget:", "e.g. $100/day")
    } else {
        Ok(selected.to_string())
    }
}

/// Create a spinner with a message
pub struct Spinner {
    progress: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner
    pub fn new(message: &str) -> Self {
        let progress = if is_quiet() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            progress.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        progress.set_message(message.to_string());
        progress.enable_steady_tick(Duration::from_millis(100));
        Spinner { progress }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.progress.is_finished() {
            self.progress.finish_and_clear();
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", style("✓").green(), message);
    }
}

/// Print an error message (always shown, even in quiet mode)
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Print a warning message (suppressed in quiet mode)
pub fn print_warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", style("!").yellow(), message);
    }
}

/// Print an info message (suppressed in quiet mode)
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", style("→").blue(), message);
    }
}

/// Check if running in a TTY
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}
