//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite store handle and repository implementation
//! - [`templates`] - HTML template files and placeholder substitution

pub mod persistence;
pub mod templates;
