//! Table assembly - business records into a typed polars frame.

use std::path::Path;

use itertools::Itertools;
use polars::prelude::*;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{FeatureError, Result};
use crate::reader;
use crate::record::BusinessRecord;
use crate::schema::{ColumnType, InferredColumn, TableSchema};

/// Assemble records into a `DataFrame`, one row per record in input order.
///
/// Column order is the first-seen order of field names across the input;
/// a record without a given field contributes a null cell.
pub fn records_to_dataframe(records: &[BusinessRecord]) -> Result<DataFrame> {
    let schema = TableSchema::infer(records);
    debug!(
        columns = %schema.columns().iter().map(|c| c.name.as_str()).join(", "),
        "inferred table schema"
    );

    let series: Vec<Series> = schema
        .columns()
        .iter()
        .map(|column| build_series(column, records))
        .collect();

    DataFrame::new(series)
        .map_err(|e| FeatureError::Polars(format!("Failed to assemble table: {}", e)))
}

/// Read a line-delimited JSON file and assemble it into a table.
pub fn load_business_table(path: impl AsRef<Path>) -> Result<DataFrame> {
    let records = reader::read_business_file(&path)?;
    let df = records_to_dataframe(&records)?;
    info!(rows = df.height(), columns = df.width(), "assembled business table");
    Ok(df)
}

fn build_series(column: &InferredColumn, records: &[BusinessRecord]) -> Series {
    let name = column.name.as_str();
    let cells = records.iter().map(|record| record.get(name));

    match column.column_type {
        ColumnType::Int => {
            let values: Vec<Option<i64>> = cells.map(|v| v.and_then(Value::as_i64)).collect();
            Series::new(name, values)
        }
        ColumnType::Float => {
            let values: Vec<Option<f64>> = cells.map(|v| v.and_then(Value::as_f64)).collect();
            Series::new(name, values)
        }
        ColumnType::Bool => {
            let values: Vec<Option<bool>> = cells.map(|v| v.and_then(Value::as_bool)).collect();
            Series::new(name, values)
        }
        ColumnType::Str => {
            let values: Vec<Option<String>> = cells
                .map(|v| {
                    v.and_then(|value| match value {
                        Value::Null => None,
                        Value::String(s) => Some(s.clone()),
                        other => Some(other.to_string()),
                    })
                })
                .collect();
            Series::new(name, values)
        }
        // Nested arrays/objects keep their JSON text so field content
        // round-trips unmodified.
        ColumnType::Json => {
            let values: Vec<Option<String>> = cells
                .map(|v| {
                    v.and_then(|value| match value {
                        Value::Null => None,
                        other => Some(other.to_string()),
                    })
                })
                .collect();
            Series::new(name, values)
        }
    }
}
