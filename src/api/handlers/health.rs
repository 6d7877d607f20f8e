//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::infrastructure::templates::TemplateKind;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database readable and all templates present
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 3 years of data" },
///     "templates": { "status": "ok", "message": "All templates present" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let templates = check_templates(&state).await;

    let all_healthy = database.is_ok() && templates.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database,
            templates,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the yield table can be queried.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.report_service.years().await {
        Ok(years) => CheckStatus::ok(format!("Connected, {} years of data", years.len())),
        Err(e) => CheckStatus::error(e.to_string()),
    }
}

/// Checks that every page template exists.
async fn check_templates(state: &AppState) -> CheckStatus {
    let missing = state.templates.missing().await;
    if missing.is_empty() {
        CheckStatus::ok("All templates present")
    } else {
        let names: Vec<&str> = missing.into_iter().map(TemplateKind::file_name).collect();
        CheckStatus::error(format!("Missing: {}", names.join(", ")))
    }
}
