//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated via `mockall` for unit tests.

pub mod yield_repository;

pub use yield_repository::YieldRepository;

#[cfg(test)]
pub use yield_repository::MockYieldRepository;
