use crate::error::PlannerError;
use serde::Serialize;

/// Preferences captured by the plan form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelPreferences {
    pub destination: String,
    /// Signed so that a zero or negative entry can be held and rejected
    pub days: i64,
    pub interests: String,
    pub budget: String,
}

impl TravelPreferences {
    /// Local guard run before any network activity
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.days <= 0 {
            return Err(PlannerError::InvalidDays);
        }
        Ok(())
    }
}

/// A single planned activity within a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

/// The plan for one day of the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyItinerary {
    /// Kept as the number the model sent so it renders exactly as written
    pub day: serde_json::Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub activities: Vec<Activity>,
}

/// Ordered list of per-day plans, exactly as returned by the model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Itinerary(pub Vec<DailyItinerary>);

impl Itinerary {
    pub fn days(&self) -> &[DailyItinerary] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
