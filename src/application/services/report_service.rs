//! Yield report service.

use std::sync::Arc;

use crate::domain::entities::{ReportView, YieldRecord};
use crate::domain::projection::project_report;
use crate::domain::repositories::YieldRepository;
use crate::error::AppError;

/// Summary counts over the whole yield table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub rows: i64,
    pub crops: Vec<String>,
    pub years: Vec<i64>,
}

/// Runs the report queries and projects their results.
pub struct ReportService<R: YieldRepository> {
    repository: Arc<R>,
}

impl<R: YieldRepository> ReportService<R> {
    /// Creates a new report service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Builds the report for a single year.
    ///
    /// Fetches the year's rows first; only when there are any is the year
    /// index fetched for navigation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the year has no rows.
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Store`] on store failures.
    /// Returns [`AppError::InternalInconsistency`] if the year index lacks `year`.
    pub async fn year_summary(&self, year: i64) -> Result<ReportView, AppError> {
        let rows = self.repository.yields_for_year(year).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(year));
        }

        let all_years = self.repository.distinct_years().await?;

        project_report(year, &rows, &all_years)
    }

    /// Every row of the table, ordered by year then crop.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Store`] on store failures.
    pub async fn comparison(&self) -> Result<Vec<YieldRecord>, AppError> {
        self.repository.all_yields().await
    }

    /// Distinct years present in the table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Store`] on store failures.
    pub async fn years(&self) -> Result<Vec<i64>, AppError> {
        self.repository.distinct_years().await
    }

    /// Row count, crops, and years.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Store`] on store failures.
    pub async fn dataset_stats(&self) -> Result<DatasetStats, AppError> {
        let rows = self.repository.count_rows().await?;
        let crops = self.repository.distinct_crops().await?;
        let years = self.repository.distinct_years().await?;

        Ok(DatasetStats { rows, crops, years })
    }
}
