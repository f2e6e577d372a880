use crate::config::Config;
use crate::error::ClientError;
use crate::types::{
    ErrorResult, FormOptions, PredictionOutcome, PredictionRequest, PredictionResponse,
};
use chrono::Utc;
use reqwest::Client;
use uuid::Uuid;

pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Check input and try again.";
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub fn prediction_failed() -> PredictionOutcome {
    PredictionOutcome::Failed(ErrorResult {
        error: PREDICTION_FAILED_MESSAGE.into(),
    })
}

/// Selectable lists for the form. Any failure falls back to the built-in
/// defaults without telling the user.
pub async fn load_options(client: &Client, config: &Config) -> FormOptions {
    match fetch_options(client, config).await {
        Ok(options) => {
            log::debug!(
                "Loaded {} days, {} times, {} locations from {}",
                options.days.len(),
                options.times.len(),
                options.locations.len(),
                config.options_url()
            );
            options
        }
        Err(err) => {
            log::warn!("Options unavailable ({err}), using default lists");
            FormOptions::defaults()
        }
    }
}

pub async fn fetch_options(client: &Client, config: &Config) -> Result<FormOptions, ClientError> {
    let response = client
        .get(config.options_url())
        .send()
        .await
        .map_err(ClientError::Transport)?;

    if !response.status().is_success() {
        return Err(ClientError::Status(response.status()));
    }

    let options: FormOptions = response.json().await.map_err(ClientError::Decode)?;
    if options.has_unusable_list() {
        return Err(ClientError::Malformed(
            "options response contains an empty list or blank entry".into(),
        ));
    }

    Ok(options)
}

/// One attempt, no retry. Whatever goes wrong, the caller only ever sees the
/// generic failure message.
pub async fn predict(
    client: &Client,
    config: &Config,
    request: &PredictionRequest,
) -> PredictionOutcome {
    let request_id = Uuid::new_v4();
    log::info!(
        "[{request_id}] Requesting prediction for {:?}",
        request.location
    );

    match request_prediction(client, config, request, &request_id.to_string()).await {
        Ok(prediction) => {
            log::info!(
                "[{request_id}] {} at {}: {} ({}%), {} spaces",
                prediction.location,
                prediction.time,
                prediction.availability,
                prediction.confidence,
                prediction.spaces
            );
            PredictionOutcome::Prediction(prediction)
        }
        Err(err) => {
            log::error!("[{request_id}] Prediction failed: {err}");
            prediction_failed()
        }
    }
}

pub async fn request_prediction(
    client: &Client,
    config: &Config,
    request: &PredictionRequest,
    request_id: &str,
) -> Result<PredictionResponse, ClientError> {
    if config.debug {
        log::debug!(
            "[{}] POST {} payload: {}",
            Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            config.predict_url(),
            serde_json::to_string(request).unwrap_or_default()
        );
    }

    let response = client
        .post(config.predict_url())
        .header(REQUEST_ID_HEADER, request_id)
        .json(request)
        .send()
        .await
        .map_err(ClientError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        if config.debug {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error body".into());
            log::debug!("Error body from prediction server: {body}");
        }
        return Err(ClientError::Status(status));
    }

    let prediction: PredictionResponse = response.json().await.map_err(ClientError::Decode)?;
    validate(&prediction)?;

    Ok(prediction)
}

fn validate(prediction: &PredictionResponse) -> Result<(), ClientError> {
    if !(0.0..=100.0).contains(&prediction.confidence) {
        return Err(ClientError::Malformed(format!(
            "confidence {} outside 0..=100",
            prediction.confidence
        )));
    }
    if !prediction.spaces.is_finite() || prediction.spaces < 0.0 {
        return Err(ClientError::Malformed(format!(
            "spaces {} is not a non-negative count",
            prediction.spaces
        )));
    }
    Ok(())
}
