//! # Yield Reports
//!
//! Server-rendered HTML reports over an agricultural yield table, built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Yield entities, repository trait, report projection
//! - **Application Layer** ([`application`]) - Report service orchestrating the queries
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store and file templates
//! - **Web Layer** ([`web`]) - HTML report pages
//! - **API Layer** ([`api`]) - Health endpoint and request tracing
//!
//! ## Pages
//!
//! - `/yields/year/{year}` (also `/summary/{year}`) - table and bar chart for one
//!   year, with circular previous/next navigation
//! - `/yields/compare` - every row embedded as JSON for a cross-year chart
//! - `/` - static home page
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_PATH="$PWD/summary.db"
//! cargo run --bin admin -- db init
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ReportService;
    pub use crate::domain::entities::{CropYield, ReportView, YieldRecord};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{SqliteYieldRepository, YieldStore};
    pub use crate::infrastructure::templates::TemplateStore;
    pub use crate::state::AppState;
}
