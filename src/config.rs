use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub prediction_server_url: String,
    pub debug: bool,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            prediction_server_url: normalize_base_url(
                &env::var("PREDICTION_SERVER_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".into()),
            ),
            debug: env::var("DEBUG")
                .map(|v| v == "1" || v == "true")
                .unwrap_or(false),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .unwrap_or(30),
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.prediction_server_url)
    }

    pub fn options_url(&self) -> String {
        format!("{}/api/options", self.prediction_server_url)
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
