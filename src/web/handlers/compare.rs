//! Cross-year comparison handler.

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::infrastructure::templates::TemplateKind;
use crate::state::AppState;
use crate::web::pages;

/// Renders the comparison page with the whole table embedded as JSON.
///
/// # Endpoint
///
/// `GET /yields/compare`
///
/// # Errors
///
/// Returns 500 if the database is unavailable, the query fails, or the
/// template is missing.
pub async fn compare_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let rows = state.report_service.comparison().await?;
    let bindings = pages::compare_bindings(&rows)?;

    let html = state
        .templates
        .render(TemplateKind::Compare, &bindings)
        .await?;

    tracing::debug!(rows = rows.len(), "Rendered comparison");
    Ok(Html(html))
}
