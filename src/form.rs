use crate::client::{predict, prediction_failed};
use crate::config::Config;
use crate::types::{PredictionOutcome, PredictionRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// State of the prediction form: what the user picked and what came back.
/// Owned by whoever renders it; nothing here is shared between requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkingForm {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(skip)]
    pub result: Option<PredictionOutcome>,
}

impl ParkingForm {
    /// `None` when no location was picked. Blank day/time are dropped so the
    /// body matches a location-only quick predict.
    pub fn to_request(&self) -> Option<PredictionRequest> {
        let location = non_blank(&self.location)?;
        Some(PredictionRequest {
            location,
            day: non_blank(&self.day),
            time: non_blank(&self.time),
        })
    }

    pub async fn submit(&mut self, client: &Client, config: &Config) -> &PredictionOutcome {
        let outcome = match self.to_request() {
            Some(request) => predict(client, config, &request).await,
            None => {
                log::warn!("Submission without a location, not contacting prediction server");
                prediction_failed()
            }
        };
        self.result.insert(outcome)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
