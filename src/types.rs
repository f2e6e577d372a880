use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const DEFAULT_TIMES: [&str; 5] = ["10:00", "12:00", "14:00", "16:00", "18:00"];
pub const DEFAULT_LOCATIONS: [&str; 3] = ["Union Deck", "West Deck", "CRI Deck"];

/// Body of `POST /predict`. Unset `day`/`time` are left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl PredictionRequest {
    /// Location-only request, as sent by the quick-predict buttons.
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            day: None,
            time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub location: String,
    pub day: String,
    pub time: String,
    pub availability: String,
    /// Percentage in `[0, 100]`.
    pub confidence: f64,
    /// Estimated count; backends may send it as `12` or `12.0`.
    pub spaces: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

/// What a single submission ends in. Serializes untagged, so a failure is
/// exactly `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionOutcome {
    Prediction(PredictionResponse),
    Failed(ErrorResult),
}

impl PredictionOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, PredictionOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOptions {
    pub days: Vec<String>,
    pub times: Vec<String>,
    pub locations: Vec<String>,
}

static DEFAULT_OPTIONS: Lazy<FormOptions> = Lazy::new(|| FormOptions {
    days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
    times: DEFAULT_TIMES.iter().map(|t| t.to_string()).collect(),
    locations: DEFAULT_LOCATIONS.iter().map(|l| l.to_string()).collect(),
});

impl FormOptions {
    pub fn defaults() -> Self {
        DEFAULT_OPTIONS.clone()
    }

    /// True when a list is empty or holds a blank entry, which would be
    /// indistinguishable from the select placeholder.
    pub fn has_unusable_list(&self) -> bool {
        [&self.days, &self.times, &self.locations]
            .iter()
            .any(|list| list.is_empty() || list.iter().any(|item| item.trim().is_empty()))
    }
}
