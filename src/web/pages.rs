//! Placeholder values for the report pages.
//!
//! Data-sourced text is never interpolated raw: crop names go through
//! auto-escaping askama fragments, and JSON payloads are made safe to embed in
//! a `<script>` element.

use askama::Template;
use serde::Serialize;

use crate::domain::entities::{ReportView, TableRow, YieldRecord};
use crate::error::AppError;
use crate::infrastructure::templates::Bindings;

pub const IMG_SRC: &str = "/images/crops.jpg";
pub const IMG_ALT: &str = "Crops comparison";
pub const TABLE_HEADER: &str = "<tr><th>Crop</th><th>Average Yield</th></tr>";
pub const CHART_TYPE: &str = "bar";

/// Sentinel replaced with the full dataset in the comparison template.
pub const CHART_DATA_SENTINEL: &str = "$$$CHART_DATA$$$";

#[derive(Template)]
#[template(
    source = "{% for row in rows %}<tr><td>{{ row.crop }}</td><td>{{ row.avg_yield }}</td></tr>{% endfor %}",
    ext = "html"
)]
struct TableRowsFragment<'a> {
    rows: &'a [TableRow],
}

#[derive(Template)]
#[template(
    source = r#"
<nav style="margin-top:1rem;text-align:center;">
  <a href="{{ base|safe }}{{ prev }}"> Previous ({{ prev }})</a> |
  <a href="{{ base|safe }}{{ next }}">Next ({{ next }}) </a>
</nav>
"#,
    ext = "html"
)]
struct NavLinksFragment<'a> {
    base: &'a str,
    prev: i64,
    next: i64,
}

/// Bindings for the year-summary template.
///
/// `nav_base` is the route prefix the navigation links point at, e.g.
/// `/yields/year/`.
///
/// # Errors
///
/// Returns [`AppError::Template`] if a fragment fails to render.
pub fn year_summary_bindings(view: &ReportView, nav_base: &str) -> Result<Bindings, AppError> {
    let year = view.year;

    let table_rows = TableRowsFragment {
        rows: &view.table_rows,
    }
    .render()?;

    let nav_links = NavLinksFragment {
        base: nav_base,
        prev: view.navigation.prev_year,
        next: view.navigation.next_year,
    }
    .render()?;

    let chart_json = script_safe_json(&view.chart_data())?;

    Ok(Bindings::new()
        .bind("TITLE", format!("Crop Yields for {year}"))
        .bind("DESCRIPTION", format!("Average crop yields for the year {year}."))
        .bind("IMG_SRC", IMG_SRC)
        .bind("IMG_ALT", IMG_ALT)
        .bind("TABLE_HEADER", TABLE_HEADER)
        .bind("TABLE_ROWS", table_rows)
        .bind("CHART_TYPE", CHART_TYPE)
        .bind("CHART_CAPTION", format!("Average crop yields in {year}"))
        .bind("CHART_JSON", chart_json)
        .bind("NAV_LINKS", nav_links))
}

/// Bindings for the comparison template.
///
/// # Errors
///
/// Returns [`AppError::InternalInconsistency`] if the rows cannot be serialized.
pub fn compare_bindings(rows: &[YieldRecord]) -> Result<Bindings, AppError> {
    Ok(Bindings::new().bind_literal(CHART_DATA_SENTINEL, script_safe_json(rows)?))
}

/// Serializes `value` as JSON that cannot terminate an enclosing `<script>`.
///
/// `<`, `>` and `&` only occur inside JSON strings, where their `\uXXXX`
/// forms decode to the same text.
pub fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::InternalInconsistency(format!("chart serialization: {e}")))?;

    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}
