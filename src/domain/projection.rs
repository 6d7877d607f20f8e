//! Projection of query results into a [`ReportView`].
//!
//! Everything here is a pure function of `(rows, all_years, year)`.

use crate::domain::entities::{
    ChartSeries, CropYield, PALETTE, ReportView, TableRow, YearNavigation,
};
use crate::error::AppError;

/// Builds the report for `year` from its rows and the ascending year index.
///
/// # Errors
///
/// Returns [`AppError::InternalInconsistency`] if `year` is not in `all_years`.
pub fn project_report(
    year: i64,
    rows: &[CropYield],
    all_years: &[i64],
) -> Result<ReportView, AppError> {
    let navigation = navigate(year, all_years)?;

    let table_rows = rows
        .iter()
        .map(|r| TableRow {
            crop: r.crop.clone(),
            avg_yield: format_yield(r.avg_yield),
        })
        .collect();

    let chart = ChartSeries {
        labels: rows.iter().map(|r| r.crop.clone()).collect(),
        values: rows.iter().map(|r| r.avg_yield).collect(),
        colors: palette_for(rows.len()),
    };

    Ok(ReportView {
        year,
        table_rows,
        chart,
        navigation,
    })
}

/// Previous and next years around `year`, wrapping at both ends.
///
/// # Errors
///
/// Returns [`AppError::InternalInconsistency`] if `year` is not in `all_years`.
pub fn navigate(year: i64, all_years: &[i64]) -> Result<YearNavigation, AppError> {
    let idx = all_years.iter().position(|&y| y == year).ok_or_else(|| {
        AppError::InternalInconsistency(format!("year {year} missing from year index"))
    })?;
    let last = all_years.len() - 1;

    let prev_year = if idx > 0 {
        all_years[idx - 1]
    } else {
        all_years[last]
    };
    let next_year = if idx < last {
        all_years[idx + 1]
    } else {
        all_years[0]
    };

    Ok(YearNavigation {
        prev_year,
        next_year,
    })
}

/// Formats a yield with three decimals.
///
/// Values exactly halfway between two thousandths round away from zero;
/// everything else rounds to the nearest thousandth of the exact binary value.
pub fn format_yield(value: f64) -> String {
    // A double sits exactly on a half-thousandth iff 16 * value is an odd integer.
    let sixteenths = value * 16.0;
    if sixteenths.fract() == 0.0 && sixteenths % 2.0 != 0.0 {
        return format!("{:.3}", (value * 1000.0).round() / 1000.0);
    }
    format!("{value:.3}")
}

/// One color per bar, cycling through [`PALETTE`].
pub fn palette_for(count: usize) -> Vec<&'static str> {
    PALETTE.iter().copied().cycle().take(count).collect()
}
