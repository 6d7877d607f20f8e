//! Rows of the `yield_summary` table.

use serde::Serialize;

/// One (crop, year) row of the yield table.
///
/// Serialized as `{"crop": .., "year": .., "avg_yield": ..}` when the full
/// dataset is embedded in the comparison page.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct YieldRecord {
    pub crop: String,
    pub year: i64,
    pub avg_yield: f64,
}

impl YieldRecord {
    pub fn new(crop: impl Into<String>, year: i64, avg_yield: f64) -> Self {
        Self {
            crop: crop.into(),
            year,
            avg_yield,
        }
    }
}

/// A crop's average yield within a single, implied year.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CropYield {
    pub crop: String,
    pub avg_yield: f64,
}

impl CropYield {
    pub fn new(crop: impl Into<String>, avg_yield: f64) -> Self {
        Self {
            crop: crop.into(),
            avg_yield,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_column_names() {
        let record = YieldRecord::new("Wheat", 2019, 3.25);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["crop"], "Wheat");
        assert_eq!(json["year"], 2019);
        assert_eq!(json["avg_yield"], 3.25);
    }
}
