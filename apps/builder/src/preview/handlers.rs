use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use crate::errors::AppError;
use crate::form::Screen;
use crate::preview::layout::{render_layout, RenderedLayout};
use crate::preview::load_snapshot;
use crate::state::AppState;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="128" height="128" viewBox="0 0 128 128"><rect width="128" height="128" fill="#e5e7eb"/><circle cx="64" cy="48" r="24" fill="#9ca3af"/><path d="M20 116c6-26 24-38 44-38s38 12 44 38z" fill="#9ca3af"/></svg>"##;

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage {
    pub layout: RenderedLayout,
}

/// GET /result
///
/// Nothing stored yet is a normal condition: the client goes back to the form.
pub async fn handle_result_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let Some(doc) = load_snapshot(&state.store).await else {
        return Ok(Redirect::to(Screen::Build.path()).into_response());
    };
    let page = ResultPage {
        layout: render_layout(&doc, &state.config.placeholder_image),
    };
    Ok(Html(page.render()?).into_response())
}

/// GET /result/layout
pub async fn handle_result_layout(State(state): State<AppState>) -> Response {
    match load_snapshot(&state.store).await {
        Some(doc) => Json(render_layout(&doc, &state.config.placeholder_image)).into_response(),
        None => Redirect::to(Screen::Build.path()).into_response(),
    }
}

/// GET /placeholder.svg
pub async fn handle_placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}
