//! Core domain entities.
//!
//! - [`YieldRecord`] - A full row of the yield table
//! - [`CropYield`] - A row of the per-year query
//! - [`ReportView`] - The projected, request-scoped report model

pub mod report;
pub mod yield_record;

pub use report::{
    BORDER_COLOR, ChartData, ChartSeries, PALETTE, ReportView, TableRow, YearNavigation,
};
pub use yield_record::{CropYield, YieldRecord};
