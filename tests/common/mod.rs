#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use yield_reports::infrastructure::persistence::YieldStore;
use yield_reports::infrastructure::templates::TemplateStore;
use yield_reports::routes::build_router;
use yield_reports::state::AppState;

pub fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(YieldStore::from_pool(pool)),
        TemplateStore::new(template_dir()),
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state, &public_dir())).unwrap()
}

/// State whose database file does not exist.
pub fn create_unavailable_state() -> AppState {
    let path = std::env::temp_dir().join("yield-reports-tests-missing.db");
    let _ = std::fs::remove_file(&path);

    AppState::new(
        Arc::new(YieldStore::lazy(path, 1)),
        TemplateStore::new(template_dir()),
    )
}

pub async fn insert_yield(pool: &SqlitePool, crop: &str, year: i64, avg_yield: f64) {
    sqlx::query("INSERT INTO yield_summary (crop, year, avg_yield) VALUES (?, ?, ?)")
        .bind(crop)
        .bind(year)
        .bind(avg_yield)
        .execute(pool)
        .await
        .unwrap();
}

/// JSON embedded in the `chart-data` script element of a rendered page.
pub fn embedded_chart_json(html: &str) -> serde_json::Value {
    let start_marker = r#"<script id="chart-data" type="application/json">"#;
    let start = html.find(start_marker).expect("chart-data script") + start_marker.len();
    let end = start + html[start..].find("</script>").expect("closing script tag");
    serde_json::from_str(&html[start..end]).unwrap()
}
