//! HTTP surface of the ReflexEval activity provider.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::error::error_body;
use crate::handlers::activity::{
    config_handler, deploy_handler, deploy_info_handler, home_handler, params_handler,
};
use crate::handlers::health_check_handler;
use crate::handlers::session::debug_session_handler;
pub use crate::state::AppState;

/// Builds the application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/params", get(params_handler))
        .route("/config", get(config_handler))
        .route("/deploy", get(deploy_info_handler).post(deploy_handler))
        .route("/debug/session", get(debug_session_handler))
        .route("/health", get(health_check_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(error_body("NotFound", &format!("No route for {}", uri.path()))),
    )
}
