//! Request-scoped view model of a year-summary report.

use serde::Serialize;

/// Bar colors, assigned cyclically: bar `i` takes `PALETTE[i % PALETTE.len()]`.
pub const PALETTE: [&str; 5] = [
    "rgba(75, 192, 192, 0.6)",
    "rgba(255, 159, 64, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 205, 86, 0.6)",
    "rgba(54, 162, 235, 0.6)",
];

pub const BORDER_COLOR: &str = "rgba(54, 162, 235, 1)";

/// Everything needed to render one year's report page.
///
/// Built fresh per request by [`crate::domain::projection::project_report`]
/// and dropped once the response is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub year: i64,
    pub table_rows: Vec<TableRow>,
    pub chart: ChartSeries,
    pub navigation: YearNavigation,
}

/// A display row: crop name and yield rounded to three decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub crop: String,
    pub avg_yield: String,
}

/// Unrounded chart data, one entry per crop.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<&'static str>,
}

/// Circular neighbours of the reported year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearNavigation {
    pub prev_year: i64,
    pub next_year: i64,
}

/// Chart.js payload embedded as `CHART_JSON`.
#[derive(Debug, Serialize)]
pub struct ChartData<'a> {
    pub labels: &'a [String],
    pub datasets: [ChartDataset<'a>; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset<'a> {
    pub label: String,
    pub data: &'a [f64],
    pub background_color: &'a [&'static str],
    pub border_color: &'static str,
    pub border_width: u32,
}

impl ReportView {
    /// Chart.js data object for this report.
    pub fn chart_data(&self) -> ChartData<'_> {
        ChartData {
            labels: &self.chart.labels,
            datasets: [ChartDataset {
                label: format!("Average Yield ({})", self.year),
                data: &self.chart.values,
                background_color: &self.chart.colors,
                border_color: BORDER_COLOR,
                border_width: 1,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_data_shape() {
        let view = ReportView {
            year: 2020,
            table_rows: vec![],
            chart: ChartSeries {
                labels: vec!["Barley".into(), "Rice".into()],
                values: vec![2.5, 4.75],
                colors: vec![PALETTE[0], PALETTE[1]],
            },
            navigation: YearNavigation {
                prev_year: 2019,
                next_year: 2018,
            },
        };

        let json = serde_json::to_value(view.chart_data()).unwrap();

        assert_eq!(json["labels"], serde_json::json!(["Barley", "Rice"]));
        let dataset = &json["datasets"][0];
        assert_eq!(dataset["label"], "Average Yield (2020)");
        assert_eq!(dataset["data"], serde_json::json!([2.5, 4.75]));
        assert_eq!(dataset["backgroundColor"][1], PALETTE[1]);
        assert_eq!(dataset["borderColor"], BORDER_COLOR);
        assert_eq!(dataset["borderWidth"], 1);
    }
}
