//! Home page handler.

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::infrastructure::templates::{Bindings, TemplateKind};
use crate::state::AppState;

/// Serves the static home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns 500 if `home.html` is missing from the template directory.
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state
        .templates
        .render(TemplateKind::Home, &Bindings::new())
        .await?;
    Ok(Html(html))
}
