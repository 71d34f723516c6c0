use super::types::TravelPreferences;

/// Build the prompt asking the model for a day-by-day itinerary
pub fn build_itinerary_prompt(preferences: &TravelPreferences) -> String {
    format!(r#"You are an expert travel planning assistant. Your task is to generate a detailed, day-by-day travel itinerary.
Base the itinerary on the following user preferences:

DESTINATION: {destination}
NUMBER OF DAYS: {days}
INTERESTS: {interests}
BUDGET: {budget}

Generate an itinerary for {days} days.

IMPORTANT: Respond ONLY with valid JSON. Do not include any text, greetings or explanations before or after the JSON.
The JSON must be an array of objects, where each object represents one day. Each day object must have this exact structure:
{{
  "day": <number>, // e.g. 1
  "title": "<string, optional descriptive title for the day, e.g. 'Arrival and Local Exploration'>",
  "activities": [
    {{
      "time": "<string, e.g. '9:00 AM - 11:00 AM', 'Morning', 'Full Day'>",
      "description": "<string, detailed description of the activity>",
      "estimatedCost": "<string, optional, e.g. '$20 USD', 'Free', 'Included in pass'>"
    }}
  ]
}}

Example for one day:
{{
  "day": 1,
  "title": "Arrival and City Highlights",
  "activities": [
    {{
      "time": "Afternoon",
      "description": "Arrive in {destination} and check in to your accommodation.",
      "estimatedCost": "Varies"
    }},
    {{
      "time": "Evening",
      "description": "Welcome dinner at a local restaurant tasting regional specialties.",
      "estimatedCost": "{dinner_cost}"
    }}
  ]
}}

Make sure the generated JSON is well formed and strictly follows this structure."#,
        destination = preferences.destination,
        days = preferences.days,
        interests = preferences.interests,
        budget = preferences.budget,
        dinner_cost = example_dinner_cost(&preferences.budget),
    )
}

/// Cost shown for the example dinner, scaled to the budget wording
fn example_dinner_cost(budget: &str) -> &'static str {
    let budget = budget.to_lowercase();
    if budget.contains("luxury") {
        "$50-100"
    } else if budget.contains("mid-range") || budget.contains("moderate") {
        "$25-50"
    } else {
        "$10-25"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> TravelPreferences {
        TravelPreferences {
            destination: "Paris".to_string(),
            days: 2,
            interests: "museums".to_string(),
            budget: "Mid-range".to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_itinerary_prompt(&paris()), build_itinerary_prompt(&paris()));
    }

    #[test]
    fn test_prompt_restates_preferences() {
        let prompt = build_itinerary_prompt(&paris());
        assert!(prompt.contains("DESTINATION: Paris"));
        assert!(prompt.contains("NUMBER OF DAYS: 2"));
        assert!(prompt.contains("INTERESTS: museums"));
        assert!(prompt.contains("BUDGET: Mid-range"));
        assert!(prompt.contains("Generate an itinerary for 2 days."));
        assert!(prompt.contains("Arrive in Paris"));
    }

    #[test]
    fn test_prompt_demands_json_shape() {
        let prompt = build_itinerary_prompt(&paris());
        assert!(prompt.contains("Respond ONLY with valid JSON"));
        assert!(prompt.contains("\"activities\": ["));
        assert!(prompt.contains("\"estimatedCost\""));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_example_dinner_cost_follows_budget() {
        assert_eq!(example_dinner_cost("Luxury"), "$50-100");
        assert_eq!(example_dinner_cost("mid-range"), "$25-50");
        assert_eq!(example_dinner_cost("Moderate spending"), "$25-50");
        assert_eq!(example_dinner_cost("Budget-friendly"), "$10-25");
        assert_eq!(example_dinner_cost("$100/day"), "$10-25");

        let mut prefs = paris();
        prefs.budget = "Luxury".to_string();
        assert!(build_itinerary_prompt(&prefs).contains("\"estimatedCost\": \"$50-100\""));
    }
}
