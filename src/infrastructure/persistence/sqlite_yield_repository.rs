//! SQLite implementation of the yield repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{CropYield, YieldRecord};
use crate::domain::repositories::YieldRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::YieldStore;

/// SQLite repository over the `yield_summary` table.
///
/// Every query is a single read-only statement with bound parameters.
pub struct SqliteYieldRepository {
    store: Arc<YieldStore>,
}

impl SqliteYieldRepository {
    /// Creates a new repository backed by the shared store handle.
    pub fn new(store: Arc<YieldStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl YieldRepository for SqliteYieldRepository {
    async fn yields_for_year(&self, year: i64) -> Result<Vec<CropYield>, AppError> {
        let pool = self.store.pool().await?;

        let rows = sqlx::query_as::<_, CropYield>(
            "SELECT crop, avg_yield FROM yield_summary WHERE year = ? ORDER BY crop",
        )
        .bind(year)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn distinct_years(&self) -> Result<Vec<i64>, AppError> {
        let pool = self.store.pool().await?;

        let years =
            sqlx::query_scalar::<_, i64>("SELECT DISTINCT year FROM yield_summary ORDER BY year")
                .fetch_all(pool)
                .await?;

        Ok(years)
    }

    async fn all_yields(&self) -> Result<Vec<YieldRecord>, AppError> {
        let pool = self.store.pool().await?;

        let rows = sqlx::query_as::<_, YieldRecord>(
            "SELECT crop, year, avg_yield FROM yield_summary ORDER BY year, crop",
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn distinct_crops(&self) -> Result<Vec<String>, AppError> {
        let pool = self.store.pool().await?;

        let crops =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT crop FROM yield_summary ORDER BY crop")
                .fetch_all(pool)
                .await?;

        Ok(crops)
    }

    async fn count_rows(&self) -> Result<i64, AppError> {
        let pool = self.store.pool().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM yield_summary")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
