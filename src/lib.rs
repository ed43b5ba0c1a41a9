//! Load line-delimited JSON business records into a polars table and
//! derive the log-transformed review count.
//!
//! The derived column compresses the heavy-tailed review-count
//! distribution: `log_review_count = log10(review_count + 1)`, where the
//! +1 offset keeps the result finite for businesses with zero reviews.

pub mod error;
pub mod features;
pub mod reader;
pub mod record;
pub mod schema;
pub mod table;

use std::path::Path;

use polars::prelude::DataFrame;

pub use error::{FeatureError, Result};
pub use features::{with_log_review_count, LOG_REVIEW_COUNT, REVIEW_COUNT};
pub use reader::{read_business_file, read_business_records};
pub use record::BusinessRecord;
pub use schema::{ColumnType, TableSchema};
pub use table::{load_business_table, records_to_dataframe};

/// Load a business file and derive the log review count in one step:
/// open, parse each line, assemble the table, add `log_review_count`.
pub fn load_business_features(path: impl AsRef<Path>) -> Result<DataFrame> {
    let table = table::load_business_table(path)?;
    features::with_log_review_count(table)
}
