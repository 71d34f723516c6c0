use super::prompt::build_itinerary_prompt;
use super::response::parse_itinerary_response;
use super::types::{Itinerary, TravelPreferences};
use crate::config::GeminiConfig;
use crate::error::PlannerError;
use crate::gemini::{ContentGenerator, GenerationRequest, RemoteError, RemoteErrorKind};

const RESPONSE_MIME_TYPE: &str = "application/json";

/// Turns travel preferences into a validated itinerary.
///
/// `generator` is `None` when no credential could be found; the planner still
/// builds so the problem can be reported when a plan is actually requested.
pub struct ItineraryPlanner<G> {
    config: GeminiConfig,
    generator: Option<G>,
}

impl<G: ContentGenerator> ItineraryPlanner<G> {
    pub fn new(config: GeminiConfig, generator: Option<G>) -> Self {
        ItineraryPlanner { config, generator }
    }

    /// The request that `generate` would send for these preferences
    pub fn request_for(&self, preferences: &TravelPreferences) -> GenerationRequest {
        GenerationRequest {
            model: self.config.model.clone(),
            prompt: build_itinerary_prompt(preferences),
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            temperature: self.config.temperature,
        }
    }

    pub async fn generate(&self, preferences: &TravelPreferences) -> Result<Itinerary, PlannerError> {
        preferences.validate()?;

        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| PlannerError::MissingApiKey(self.config.api_key_env.clone()))?;

        let request = self.request_for(preferences);
        tracing::info!(
            destination = %preferences.destination,
            days = preferences.days,
            model = %request.model,
            "Generating itinerary"
        );

        let raw = generator
            .generate(&request)
            .await
            .map_err(|e| self.classify(e))?;

        let itinerary = parse_itinerary_response(&raw).map_err(PlannerError::ResponseParse)?;
        tracing::info!(days = itinerary.len(), "Itinerary generated");
        Ok(itinerary)
    }

    fn classify(&self, error: RemoteError) -> PlannerError {
        tracing::debug!(kind = ?error.kind, error = %error.message, "Gemini request failed");
        match error.kind {
            RemoteErrorKind::Auth => PlannerError::InvalidApiKey(self.config.api_key_env.clone()),
            RemoteErrorKind::Quota => PlannerError::QuotaExceeded,
            RemoteErrorKind::Transient | RemoteErrorKind::Other => {
                PlannerError::Generation(error.message)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::itinerary::ResponseFailure;

    fn planner_with(generator: FakeGenerator) -> ItineraryPlanner<FakeGenerator> {
        ItineraryPlanner::new(GeminiConfig::default(), Some(generator))
    }

    #[tokio::test]
    async fn test_generate_returns_itinerary() {
        let planner = planner_with(FakeGenerator::replying(PARIS_TWO_DAYS));
        let itinerary = planner.generate(&paris()).await.unwrap();
        assert_eq!(itinerary.len(), 2);

        let generator = planner.generator.as_ref().unwrap();
        let requests = generator.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gemini-2.5-flash");
        assert_eq!(requests[0].response_mime_type, "application/json");
        assert_eq!(requests[0].temperature, 0.7);
        assert_eq!(requests[0].prompt, build_itinerary_prompt(&paris()));
    }

    #[tokio::test]
    async fn test_missing_generator_is_config_error() {
        let planner: ItineraryPlanner<FakeGenerator> = ItineraryPlanner::new(GeminiConfig::default(), None);
        let err = planner.generate(&paris()).await.unwrap_err();
        assert!(matches!(err, PlannerError::MissingApiKey(ref env) if env == "API_KEY"));
    }

    #[tokio::test]
    async fn test_invalid_days_never_calls_remote() {
        let planner = planner_with(FakeGenerator::replying(PARIS_TWO_DAYS));
        let mut prefs = paris();
        prefs.days = 0;
        let err = planner.generate(&prefs).await.unwrap_err();
        assert!(matches!(err, PlannerError::InvalidDays));
        assert_eq!(planner.generator.as_ref().unwrap().calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_errors_are_classified() {
        let cases = [
            (RemoteError::new(RemoteErrorKind::Auth, "API key not valid"), "InvalidApiKey"),
            (RemoteError::from_message("429 You exceeded your current quota"), "QuotaExceeded"),
            (RemoteError::new(RemoteErrorKind::Transient, "connection reset"), "Generation"),
        ];

        for (error, expected) in cases {
            let planner = planner_with(FakeGenerator::failing(error));
            let err = planner.generate(&paris()).await.unwrap_err();
            let actual = match err {
                PlannerError::InvalidApiKey(_) => "InvalidApiKey",
                PlannerError::QuotaExceeded => "QuotaExceeded",
                PlannerError::Generation(ref msg) => {
                    assert_eq!(err.to_string(), format!("Failed to generate the itinerary. {}", msg));
                    "Generation"
                }
                _ => "other",
            };
            assert_eq!(actual, expected);
        }
    }

    #[tokio::test]
    async fn test_parse_failures_are_distinguishable() {
        let planner = planner_with(FakeGenerator::replying("not json at all"));
        let err = planner.generate(&paris()).await.unwrap_err();
        assert!(matches!(err, PlannerError::ResponseParse(ResponseFailure::MalformedJson(_))));

        let planner = planner_with(FakeGenerator::replying(r#"{"itinerary": []}"#));
        let err = planner.generate(&paris()).await.unwrap_err();
        assert!(matches!(err, PlannerError::ResponseParse(ResponseFailure::SchemaMismatch { .. })));
    }
}
