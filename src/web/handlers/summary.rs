//! Year-summary report handler.

use axum::{
    extract::{MatchedPath, Path, State},
    response::Html,
};

use crate::error::AppError;
use crate::infrastructure::templates::TemplateKind;
use crate::state::AppState;
use crate::web::pages;

/// Navigation prefix used when the matched route does not end in `{year}`.
pub const DEFAULT_NAV_BASE: &str = "/yields/year/";

/// Renders the table-and-chart report for one year.
///
/// # Endpoints
///
/// `GET /yields/year/{year}` and `GET /summary/{year}`
///
/// Previous/next links point back at whichever of the two routes matched.
///
/// The database is checked before the year is parsed, so a missing database
/// answers 500 whatever the path segment.
///
/// # Errors
///
/// - 400 if `year` is not an integer
/// - 404 if the table has no rows for `year`
/// - 500 if the database is unavailable, a query fails, or the template is missing
pub async fn year_summary_handler(
    State(state): State<AppState>,
    matched: MatchedPath,
    Path(raw_year): Path<String>,
) -> Result<Html<String>, AppError> {
    state.store.pool().await?;
    let year = parse_year(&raw_year)?;

    let view = state.report_service.year_summary(year).await?;

    let nav_base = matched
        .as_str()
        .strip_suffix("{year}")
        .unwrap_or(DEFAULT_NAV_BASE);
    let bindings = pages::year_summary_bindings(&view, nav_base)?;

    let html = state
        .templates
        .render(TemplateKind::YearSummary, &bindings)
        .await?;

    tracing::debug!(year, crops = view.table_rows.len(), "Rendered year summary");
    Ok(Html(html))
}

/// Parses a year path segment.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] unless the trimmed segment is an integer.
pub fn parse_year(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse::<i64>().map_err(|_| AppError::BadRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2019").unwrap(), 2019);
        assert_eq!(parse_year(" 2020 ").unwrap(), 2020);
        assert_eq!(parse_year("-5").unwrap(), -5);
    }

    #[test]
    fn test_parse_year_rejects_non_integers() {
        for raw in ["abc", "", "2019abc", "20.19", "1e3"] {
            assert!(
                matches!(parse_year(raw), Err(AppError::BadRequest)),
                "{raw:?} should be rejected"
            );
        }
    }
}
