//! Top-level router combining page, API, and static routes.
//!
//! # Route Structure
//!
//! - `GET /`                    - Home page
//! - `GET /yields/year/{year}`  - Year summary report
//! - `GET /summary/{year}`      - Year summary report (legacy path)
//! - `GET /yields/compare`      - Cross-year comparison
//! - `GET /health`              - Database and template health
//! - anything else              - Static files from the public directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes, static files, and tracing.
///
/// Static files are the fallback: a path matching no route is looked up in
/// `public_dir`, and a missing file answers 404.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// [`build_router`] wrapped so trailing slashes are ignored.
pub fn app_router(state: AppState, public_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, public_dir))
}
