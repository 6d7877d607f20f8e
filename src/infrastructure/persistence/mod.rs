//! SQLite persistence.
//!
//! - [`YieldStore`] - Lazily opened shared pool
//! - [`SqliteYieldRepository`] - Queries over `yield_summary`

pub mod sqlite_yield_repository;
pub mod store;

pub use sqlite_yield_repository::SqliteYieldRepository;
pub use store::YieldStore;
