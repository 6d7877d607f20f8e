//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::report_service::ReportService`] - Year summaries, comparison data, dataset statistics

pub mod services;
