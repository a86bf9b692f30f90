//! Contains all the routes that this application can handle.

mod api;

use crate::AppState;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .nest("/api", api_routes(app_state))
}

/// API - Routes nested under "/api" path
fn api_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health", post(api::health_ingest))
        .with_state(app_state.clone())
        .nest("/newsletter", newsletter_routes(app_state))
}

/// NEWSLETTER - Routes nested under "/newsletter" path
fn newsletter_routes(app_state: AppState) -> Router {
    // The widget route serves the same handler as the plain subscribe route
    // but is reachable from other origins: browsers get permissive CORS
    // headers and preflight OPTIONS requests are answered here, without ever
    // reaching the provider.
    let widget = Router::new()
        .route("/subscribe/widget", post(api::subscribe))
        .layer(CorsLayer::permissive())
        .with_state(app_state.clone());

    Router::new()
        .route("/subscribe", post(api::subscribe))
        .route("/subscribe/blog", post(api::subscribe_blog))
        .with_state(app_state)
        .merge(widget)
}
