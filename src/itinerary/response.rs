use super::types::{Activity, DailyItinerary, Itinerary};
use serde_json::Value;
use thiserror::Error;

/// Why a model response could not be turned into an itinerary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseFailure {
    #[error("response is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("response does not match the itinerary structure: {reason}")]
    SchemaMismatch { reason: String },
}

impl ResponseFailure {
    fn mismatch(reason: impl Into<String>) -> Self {
        ResponseFailure::SchemaMismatch {
            reason: reason.into(),
        }
    }
}

/// Strip a markdown code fence (optionally tagged `json`) from a response.
/// Text that is not fenced is returned trimmed but otherwise untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    if body.trim().is_empty() {
        return trimmed;
    }

    let body = body.strip_prefix("json").unwrap_or(body);
    body.trim()
}

/// Parse a raw model response into a validated itinerary.
///
/// The result is all-or-nothing: a single malformed day or activity rejects
/// the whole response.
pub fn parse_itinerary_response(raw: &str) -> Result<Itinerary, ResponseFailure> {
    let json_str = strip_code_fence(raw);

    let value: Value = serde_json::from_str(json_str).map_err(|e| {
        tracing::debug!(error = %e, raw_response = raw, "Failed to parse itinerary JSON");
        ResponseFailure::MalformedJson(e.to_string())
    })?;

    validate_itinerary(&value).map_err(|failure| {
        tracing::debug!(%failure, "Parsed JSON does not match the itinerary structure");
        failure
    })
}

fn validate_itinerary(value: &Value) -> Result<Itinerary, ResponseFailure> {
    let days = value
        .as_array()
        .ok_or_else(|| ResponseFailure::mismatch("top-level value is not an array"))?;

    days.iter()
        .enumerate()
        .map(|(index, day)| validate_day(index, day))
        .collect::<Result<Vec<_>, _>>()
        .map(Itinerary)
}

fn validate_day(index: usize, value: &Value) -> Result<DailyItinerary, ResponseFailure> {
    let day = match value.get("day") {
        Some(Value::Number(n)) => n.clone(),
        _ => {
            return Err(ResponseFailure::mismatch(format!(
                "entry {} has no numeric day",
                index
            )))
        }
    };

    let activities = value
        .get("activities")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ResponseFailure::mismatch(format!("day {} has no activities array", day))
        })?;

    let activities = activities
        .iter()
        .enumerate()
        .map(|(i, activity)| validate_activity(&day, i, activity))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DailyItinerary {
        day,
        title: string_field(value, "title"),
        activities,
    })
}

fn validate_activity(
    day: &serde_json::Number,
    index: usize,
    value: &Value,
) -> Result<Activity, ResponseFailure> {
    let required = |field: &str| {
        string_field(value, field).ok_or_else(|| {
            ResponseFailure::mismatch(format!(
                "activity {} of day {} has no string {}",
                index, day, field
            ))
        })
    };

    Ok(Activity {
        time: required("time")?,
        description: required("description")?,
        estimated_cost: string_field(value, "estimatedCost"),
    })
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DAYS: &str = r#"[
        {"day": 1, "title": "Arrival", "activities": [
            {"time": "Afternoon", "description": "Check in", "estimatedCost": "Varies"},
            {"time": "Evening", "description": "Dinner by the river"}
        ]},
        {"day": 2, "activities": [
            {"time": "Morning", "description": "Louvre", "estimatedCost": "$22"}
        ]}
    ]"#;

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fence("  ```json [1] ```  "), "[1]");
        assert_eq!(strip_code_fence("  [1]  "), "[1]");
        assert_eq!(strip_code_fence("```json\n[1]"), "```json\n[1]");
        assert_eq!(strip_code_fence("``````"), "``````");
    }

    #[test]
    fn test_parse_plain_array() {
        let itinerary = parse_itinerary_response(TWO_DAYS).unwrap();
        assert_eq!(itinerary.len(), 2);

        let first = &itinerary.days()[0];
        assert_eq!(first.day.as_u64(), Some(1));
        assert_eq!(first.title.as_deref(), Some("Arrival"));
        assert_eq!(first.activities.len(), 2);
        assert_eq!(first.activities[0].estimated_cost.as_deref(), Some("Varies"));
        assert_eq!(first.activities[1].estimated_cost, None);

        let second = &itinerary.days()[1];
        assert_eq!(second.title, None);
        assert_eq!(second.activities[0].description, "Louvre");
    }

    #[test]
    fn test_fenced_matches_unfenced() {
        let fenced = format!("```json\n{}\n```", TWO_DAYS);
        let bare_fence = format!("\n```\n{}\n```\n", TWO_DAYS);

        let expected = parse_itinerary_response(TWO_DAYS).unwrap();
        assert_eq!(parse_itinerary_response(&fenced).unwrap(), expected);
        assert_eq!(parse_itinerary_response(&bare_fence).unwrap(), expected);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let itinerary = parse_itinerary_response("[]").unwrap();
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_non_json_is_malformed() {
        let result = parse_itinerary_response("Sure! Here is your trip to Paris.");
        assert!(matches!(result, Err(ResponseFailure::MalformedJson(_))));
    }

    #[test]
    fn test_object_instead_of_array_is_schema_mismatch() {
        let result = parse_itinerary_response(r#"{"day": 1, "activities": []}"#);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));

        let result = parse_itinerary_response("{}");
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));
    }

    #[test]
    fn test_non_numeric_day_rejected() {
        let result = parse_itinerary_response(r#"[{"day": "1", "activities": []}]"#);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));

        let result = parse_itinerary_response(r#"[{"activities": []}]"#);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));
    }

    #[test]
    fn test_missing_activities_rejected() {
        let result = parse_itinerary_response(r#"[{"day": 1}]"#);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));

        let result = parse_itinerary_response(r#"[{"day": 1, "activities": "none"}]"#);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));
    }

    #[test]
    fn test_activity_without_string_fields_rejects_whole_response() {
        let missing_time = r#"[
            {"day": 1, "activities": [{"time": "Morning", "description": "Walk"}]},
            {"day": 2, "activities": [{"description": "Museum"}]}
        ]"#;
        let result = parse_itinerary_response(missing_time);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));

        let numeric_description =
            r#"[{"day": 1, "activities": [{"time": "Noon", "description": 42}]}]"#;
        let result = parse_itinerary_response(numeric_description);
        assert!(matches!(result, Err(ResponseFailure::SchemaMismatch { .. })));
    }

    #[test]
    fn test_optional_fields_of_wrong_type_are_dropped() {
        let raw = r#"[{"day": 1, "title": 7, "extra": true, "activities": [
            {"time": "Noon", "description": "Lunch", "estimatedCost": 15}
        ]}]"#;
        let itinerary = parse_itinerary_response(raw).unwrap();
        let day = &itinerary.days()[0];
        assert_eq!(day.title, None);
        assert_eq!(day.activities[0].estimated_cost, None);
    }
}
