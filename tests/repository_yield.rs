use sqlx::SqlitePool;
use std::sync::Arc;
use yield_reports::domain::entities::{CropYield, YieldRecord};
use yield_reports::domain::repositories::YieldRepository;
use yield_reports::error::AppError;
use yield_reports::infrastructure::persistence::{SqliteYieldRepository, YieldStore};

fn repository(pool: SqlitePool) -> SqliteYieldRepository {
    SqliteYieldRepository::new(Arc::new(YieldStore::from_pool(pool)))
}

#[sqlx::test(fixtures("yields"))]
async fn test_yields_for_year_ordered_by_crop(pool: SqlitePool) {
    let repo = repository(pool);

    let rows = repo.yields_for_year(2018).await.unwrap();

    assert_eq!(
        rows,
        vec![
            CropYield::new("Barley", 3.1234),
            CropYield::new("Maize", 5.43219),
            CropYield::new("Wheat", 2.9999),
        ]
    );
}

#[sqlx::test(fixtures("yields"))]
async fn test_yields_for_missing_year_is_empty(pool: SqlitePool) {
    let repo = repository(pool);

    let rows = repo.yields_for_year(1999).await.unwrap();

    assert!(rows.is_empty());
}

#[sqlx::test(fixtures("yields"))]
async fn test_distinct_years_ascending(pool: SqlitePool) {
    let repo = repository(pool);

    let years = repo.distinct_years().await.unwrap();

    assert_eq!(years, vec![2018, 2019, 2020]);
}

#[sqlx::test(fixtures("yields"))]
async fn test_all_yields_ordered_by_year_then_crop(pool: SqlitePool) {
    let repo = repository(pool);

    let rows = repo.all_yields().await.unwrap();

    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], YieldRecord::new("Barley", 2018, 3.1234));
    assert_eq!(rows[3], YieldRecord::new("Maize", 2019, 5.1));
    assert_eq!(rows[7], YieldRecord::new("Rice", 2020, 4.75));
}

#[sqlx::test(fixtures("yields"))]
async fn test_counts_and_crops(pool: SqlitePool) {
    let repo = repository(pool);

    assert_eq!(repo.count_rows().await.unwrap(), 8);
    assert_eq!(
        repo.distinct_crops().await.unwrap(),
        vec!["Barley", "Maize", "Rice", "Wheat"]
    );
}

#[sqlx::test(fixtures("yields"))]
async fn test_query_failure_is_store_error(pool: SqlitePool) {
    sqlx::query("DROP TABLE yield_summary")
        .execute(&pool)
        .await
        .unwrap();
    let repo = repository(pool);

    let result = repo.distinct_years().await;

    assert!(matches!(result, Err(AppError::Store(msg)) if msg.contains("yield_summary")));
}

#[tokio::test]
async fn test_missing_database_is_unavailable() {
    let path = std::env::temp_dir().join("yield-reports-repo-missing.db");
    let _ = std::fs::remove_file(&path);
    let repo = SqliteYieldRepository::new(Arc::new(YieldStore::lazy(path, 1)));

    assert!(matches!(
        repo.yields_for_year(2018).await,
        Err(AppError::StoreUnavailable)
    ));
    assert!(matches!(
        repo.all_yields().await,
        Err(AppError::StoreUnavailable)
    ));
}
