pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod render;
pub mod state;
pub mod types;

pub use crate::client::{PREDICTION_FAILED_MESSAGE, load_options, predict};
pub use crate::config::Config;
pub use crate::error::ClientError;
pub use crate::form::ParkingForm;
pub use crate::render::{RenderedResult, ResultStyle, render, render_page};
pub use crate::state::AppState;
pub use crate::types::*;

pub use actix_web;
pub use log;
pub use reqwest;
