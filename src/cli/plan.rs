use crate::cli::PlanArgs;
use crate::config::{self, Config, GeminiConfig, PreferenceDefaults};
use crate::error::{ExitStatus, Result, TripcraftError};
use crate::gemini::GeminiClient;
use crate::itinerary::{ItineraryPlanner, TravelPreferences};
use crate::render;
use crate::session::FormSession;
use crate::ui;

/// Run the plan command
pub async fn run_plan(args: PlanArgs, config: &Config) -> Result<ExitStatus> {
    let preferences = collect_preferences(&args, &config.defaults, ui::is_interactive())?;

    if args.dry_run {
        println!("{}", dry_run_prompt(&preferences, &config.gemini)?);
        return Ok(ExitStatus::Success);
    }

    // Credential is looked up once, up front; absence surfaces on submit
    let generator = match config::resolve_api_key(&config.gemini) {
        Some(key) => Some(GeminiClient::new(&config.gemini, key)?),
        None => None,
    };
    let planner = ItineraryPlanner::new(config.gemini.clone(), generator);

    let mut session = FormSession::new(preferences);
    {
        let _spinner = ui::Spinner::new("Crafting your adventure... please wait a moment.");
        session.submit(&planner).await;
    }

    if let Some(message) = session.error_message() {
        ui::print_error(&message);
    } else if let Some(itinerary) = session.itinerary() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(itinerary)?);
        } else {
            print!("{}", render::render_itinerary(itinerary));
        }
    }

    Ok(session.exit_status())
}

/// Merge flags, configured defaults and (when attached to a terminal)
/// interactive answers into a full set of preferences
fn collect_preferences(
    args: &PlanArgs,
    defaults: &PreferenceDefaults,
    interactive: bool,
) -> Result<TravelPreferences> {
    let destination = match args.destination {
        Some(ref d) => required("destination", d)?,
        None if interactive => ui::prompt_required_text("Destination:", "e.g. Paris, France, Italy")?,
        None => return Err(missing_flag("destination")),
    };

    let days = match args.days {
        Some(days) => days,
        None if interactive => ui::prompt_number("Number of days:", defaults.days)?,
        None => defaults.days,
    };

    let interests = match args.interests {
        Some(ref i) => required("interests", i)?,
        None if interactive => ui::prompt_required_text(
            "Interests and activities:",
            "e.g. museums, hiking, local cuisine, historical sites",
        )?,
        None => return Err(missing_flag("interests")),
    };

    let budget = match args.budget {
        Some(ref b) => required("budget", b)?,
        None if interactive => ui::prompt_budget(&defaults.budget)?,
        None => defaults.budget.clone(),
    };

    Ok(TravelPreferences {
        destination,
        days,
        interests,
        budget,
    })
}

/// The prompt a submission would send. Never touches the credential.
fn dry_run_prompt(preferences: &TravelPreferences, gemini: &GeminiConfig) -> Result<String> {
    preferences.validate()?;
    let planner: ItineraryPlanner<GeminiClient> = ItineraryPlanner::new(gemini.clone(), None);
    Ok(planner.request_for(preferences).prompt)
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TripcraftError::Validation(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}

fn missing_flag(field: &str) -> TripcraftError {
    TripcraftError::Validation(format!(
        "{} is required when not running interactively (use --{})",
        field, field
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> PlanArgs {
        PlanArgs {
            destination: Some("Paris".to_string()),
            interests: Some("museums".to_string()),
            ..PlanArgs::default()
        }
    }

    #[test]
    fn test_collect_uses_defaults_when_not_interactive() {
        let prefs = collect_preferences(&args(), &PreferenceDefaults::default(), false).unwrap();
        assert_eq!(prefs.destination, "Paris");
        assert_eq!(prefs.days, 3);
        assert_eq!(prefs.interests, "museums");
        assert_eq!(prefs.budget, "Mid-range");
    }

    #[test]
    fn test_collect_keeps_explicit_values() {
        let mut args = args();
        args.days = Some(-2);
        args.budget = Some("  Luxury ".to_string());
        let prefs = collect_preferences(&args, &PreferenceDefaults::default(), false).unwrap();
        // Left for the form guard to reject
        assert_eq!(prefs.days, -2);
        assert_eq!(prefs.budget, "Luxury");
    }

    #[test]
    fn test_collect_requires_destination_without_tty() {
        let mut args = args();
        args.destination = None;
        let err = collect_preferences(&args, &PreferenceDefaults::default(), false).unwrap_err();
        assert!(matches!(err, TripcraftError::Validation(ref m) if m.contains("--destination")));
    }

    #[test]
    fn test_collect_rejects_blank_fields() {
        let mut args = args();
        args.interests = Some("   ".to_string());
        let err = collect_preferences(&args, &PreferenceDefaults::default(), false).unwrap_err();
        assert_eq!(err.exit_status(), ExitStatus::ValidationFailed);
    }

    fn prefs(days: i64) -> TravelPreferences {
        TravelPreferences {
            destination: "Paris".to_string(),
            days,
            interests: "museums".to_string(),
            budget: "Mid-range".to_string(),
        }
    }

    #[test]
    fn test_dry_run_prompt_reflects_preferences() {
        let prompt = dry_run_prompt(&prefs(2), &GeminiConfig::default()).unwrap();
        assert!(prompt.contains("DESTINATION: Paris"));
        assert!(prompt.contains("Generate an itinerary for 2 days."));
    }

    #[test]
    fn test_dry_run_rejects_non_positive_days() {
        for days in [0, -3] {
            let err = dry_run_prompt(&prefs(days), &GeminiConfig::default()).unwrap_err();
            assert_eq!(err.exit_status(), ExitStatus::ValidationFailed);
        }
    }

    #[tokio::test]
    async fn test_dry_run_skips_key_command() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("key-command-ran");
        let config = Config {
            gemini: GeminiConfig {
                api_key_command: Some(format!("touch '{}' && echo secret", marker.display())),
                ..GeminiConfig::default()
            },
            ..Config::default()
        };
        let args = PlanArgs {
            days: Some(2),
            budget: Some("Mid-range".to_string()),
            dry_run: true,
            ..args()
        };

        let status = run_plan(args, &config).await.unwrap();

        assert_eq!(status, ExitStatus::Success);
        assert!(!marker.exists());
    }
}
