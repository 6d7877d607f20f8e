//! HTML page handlers.

mod compare;
mod home;
mod summary;

pub use compare::compare_handler;
pub use home::home_handler;
pub use summary::{DEFAULT_NAV_BASE, parse_year, year_summary_handler};
