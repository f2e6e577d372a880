use crate::config::Config;
use reqwest::Client;

/// Shared by every request: immutable config and a pooled HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
}
