pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::form::handlers as form;
use crate::preview::handlers as preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Build screen
        .route("/", get(form::handle_build_page))
        .route("/api/draft", get(form::handle_get_draft))
        .route("/api/draft/events", post(form::handle_event))
        .route(
            "/api/draft/profile-image",
            post(form::handle_profile_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/draft/submit", post(form::handle_submit))
        .route("/edit", get(form::handle_edit))
        // Result screen
        .route("/result", get(preview::handle_result_page))
        .route("/result/layout", get(preview::handle_result_layout))
        .route("/result/pdf", get(export::handle_download_pdf))
        .route("/placeholder.svg", get(preview::handle_placeholder))
        .with_state(state)
}
