/// HTTP server for the card grid
///
/// Serves the server-rendered app, a health probe and the compiled site
/// assets.

use axum::{routing::get, Json, Router};
use leptos::LeptosOptions;
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::App;
use crate::pages::home::CARDS;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub count: usize,
    pub titles: Vec<&'static str>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        count: CARDS.len(),
        titles: CARDS.iter().map(|card| card.title).collect(),
    })
}

pub fn router(options: LeptosOptions) -> Router {
    let site_root = options.site_root.to_string();

    Router::new()
        .route("/", get(leptos_axum::render_app_to_stream(options, App)))
        .route("/health", get(health))
        .fallback_service(ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http())
}
