use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use parkcast::{config::Config, handlers, state::AppState};
use reqwest::Client;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let config = Config::from_env();

    let client = Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(std::io::Error::other)?;

    let state = Arc::new(AppState {
        config: config.clone(),
        client,
    });

    info!(
        "\n┌───────────────────────────────────────────┐\
         \n│      Parking Availability Predictor       │\
         \n└───────────────────────────────────────────┘\n"
    );
    info!("Form available at http://localhost:{port}/");
    info!("Using prediction server at: {}", config.prediction_server_url);
    info!(
        "Debug mode: {}",
        if config.debug { "ENABLED" } else { "disabled" }
    );
    info!("Request timeout: {}s", config.request_timeout_secs);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(state.clone()))
            .wrap(Logger::default())
            .service(
                web::resource("/")
                    .route(web::get().to(handlers::index))
                    .route(web::post().to(handlers::submit)),
            )
            .service(web::resource("/health").route(web::get().to(handlers::health)))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
