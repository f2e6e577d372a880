use crate::client::load_options;
use crate::form::ParkingForm;
use crate::render::render_page;
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, web};

fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-cache"))
        .body(body)
}

pub async fn index(state: web::Data<AppState>) -> impl Responder {
    let options = load_options(&state.client, &state.config).await;
    html_page(render_page(&options, &ParkingForm::default()))
}

/// Handles both the full form and the location-only quick-predict buttons.
/// Failures are rendered into the page, so this always answers 200.
pub async fn submit(state: web::Data<AppState>, form: web::Form<ParkingForm>) -> impl Responder {
    let mut form = form.into_inner();
    log::debug!(
        "Form submitted: location={:?} day={:?} time={:?}",
        form.location,
        form.day,
        form.time
    );

    let (options, _) = tokio::join!(
        load_options(&state.client, &state.config),
        form.submit(&state.client, &state.config)
    );

    html_page(render_page(&options, &form))
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "predictionServerUrl": state.config.prediction_server_url
    }))
}
