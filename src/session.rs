use crate::error::{ExitStatus, PlannerError};
use crate::gemini::ContentGenerator;
use crate::itinerary::{Itinerary, ItineraryPlanner, TravelPreferences};

/// Where the plan form is in its lifecycle
#[derive(Debug)]
pub enum FormState {
    Idle,
    Submitting,
    Success(Itinerary),
    Failure(PlannerError),
}

/// The plan form: the preferences being edited plus the outcome of the
/// last submission. Only one submission can be in flight since `submit`
/// holds the session mutably for its whole duration.
#[derive(Debug)]
pub struct FormSession {
    preferences: TravelPreferences,
    state: FormState,
}

impl FormSession {
    pub fn new(preferences: TravelPreferences) -> Self {
        FormSession {
            preferences,
            state: FormState::Idle,
        }
    }

    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self.state {
            FormState::Success(ref itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// The message to display for the last failure, if any
    pub fn error_message(&self) -> Option<String> {
        match self.state {
            FormState::Failure(ref e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Exit status reflecting the outcome of the last submission
    pub fn exit_status(&self) -> ExitStatus {
        match self.state {
            FormState::Success(_) => ExitStatus::Success,
            FormState::Failure(ref e) => e.exit_status(),
            FormState::Idle | FormState::Submitting => ExitStatus::GeneralError,
        }
    }

    /// Submit the current preferences. Any previous result or error is
    /// cleared first; a non-positive day count fails without a network call.
    pub async fn submit<G: ContentGenerator>(&mut self, planner: &ItineraryPlanner<G>) {
        self.state = FormState::Submitting;

        if let Err(e) = self.preferences.validate() {
            tracing::debug!(days = self.preferences.days, "Rejected plan submission");
            self.state = FormState::Failure(e);
            return;
        }

        self.state = match planner.generate(&self.preferences).await {
            Ok(itinerary) => FormState::Success(itinerary),
            Err(e) => {
                tracing::debug!(error = %e, "Itinerary generation failed");
                FormState::Failure(e)
            }
        };
    }
}
