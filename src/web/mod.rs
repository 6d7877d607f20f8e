//! Server-rendered HTML report pages.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`pages`] - Placeholder values and escaped HTML fragments
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod pages;
pub mod routes;
