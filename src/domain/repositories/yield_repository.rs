//! Repository trait for read access to the yield table.

use crate::domain::entities::{CropYield, YieldRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to `yield_summary`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteYieldRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// Every method fails with [`AppError::StoreUnavailable`] when the database
/// file is absent and with [`AppError::Store`] when a query fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YieldRepository: Send + Sync {
    /// Crops and their average yield for `year`, ordered by crop.
    async fn yields_for_year(&self, year: i64) -> Result<Vec<CropYield>, AppError>;

    /// Distinct years present in the table, ascending.
    async fn distinct_years(&self) -> Result<Vec<i64>, AppError>;

    /// Every row, ordered by year then crop.
    async fn all_yields(&self) -> Result<Vec<YieldRecord>, AppError>;

    /// Distinct crop names, ascending.
    async fn distinct_crops(&self) -> Result<Vec<String>, AppError>;

    /// Total number of rows.
    async fn count_rows(&self) -> Result<i64, AppError>;
}
