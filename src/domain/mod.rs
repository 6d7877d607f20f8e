//! Domain layer: entities, repository contracts, and the report projection.
//!
//! # Architecture
//!
//! - [`entities`] - Yield rows and the report view model
//! - [`repositories`] - Data access trait definitions
//! - [`projection`] - Pure derivation of a [`entities::ReportView`] from query results
//!
//! The domain layer has no dependency on HTTP, SQLite, or template files.

pub mod entities;
pub mod projection;
pub mod repositories;
