//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{compare_handler, home_handler, year_summary_handler};
use axum::{Router, routing::get};

/// Report page routes.
///
/// # Endpoints
///
/// - `GET /` - Home page
/// - `GET /yields/year/{year}` - Year summary report
/// - `GET /summary/{year}` - Same report under its legacy path
/// - `GET /yields/compare` - Cross-year comparison
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/yields/year/{year}", get(year_summary_handler))
        .route("/summary/{year}", get(year_summary_handler))
        .route("/yields/compare", get(compare_handler))
}
