//! Derived review-count features.

use polars::prelude::*;
use tracing::debug;

use crate::error::{FeatureError, Result};

/// Raw review count column expected on every business record.
pub const REVIEW_COUNT: &str = "review_count";

/// Derived column: `log10(review_count + 1)`.
pub const LOG_REVIEW_COUNT: &str = "log_review_count";

/// Add `log_review_count` to the table.
///
/// The +1 offset keeps the logarithm finite at a count of zero:
/// `log10(0 + 1) = 0`. Every original column passes through untouched;
/// exactly one column is added.
pub fn with_log_review_count(df: DataFrame) -> Result<DataFrame> {
    let counts = df
        .column(REVIEW_COUNT)
        .map_err(|_| FeatureError::MissingColumn {
            column: REVIEW_COUNT.to_string(),
        })?;

    if !counts.dtype().is_numeric() {
        return Err(FeatureError::NotNumeric {
            column: REVIEW_COUNT.to_string(),
            dtype: counts.dtype().to_string(),
        });
    }

    if counts.null_count() > 0 {
        return Err(FeatureError::MissingField {
            field: REVIEW_COUNT.to_string(),
            row: first_null_row(counts)?,
        });
    }

    debug!(rows = df.height(), "deriving {}", LOG_REVIEW_COUNT);

    df.lazy()
        .with_columns([(col(REVIEW_COUNT).cast(DataType::Float64) + lit(1.0))
            .log(10.0)
            .alias(LOG_REVIEW_COUNT)])
        .collect()
        .map_err(|e| FeatureError::Polars(format!("Derive failed: {}", e)))
}

fn first_null_row(counts: &Series) -> Result<usize> {
    let floats = counts
        .cast(&DataType::Float64)
        .map_err(|e| FeatureError::Polars(format!("Cast failed: {}", e)))?;
    let floats = floats
        .f64()
        .map_err(|e| FeatureError::Polars(e.to_string()))?;
    let pos = floats.into_iter().position(|v| v.is_none()).unwrap_or(0);
    Ok(pos)
}
