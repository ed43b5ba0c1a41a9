use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Line {line} is not a JSON object (found {found})")]
    NotAnObject { line: usize, found: &'static str },

    #[error("Column not found: {column}")]
    MissingColumn { column: String },

    #[error("Row {row} has no value for field '{field}'")]
    MissingField { field: String, row: usize },

    #[error("Column '{column}' is not numeric (found {dtype})")]
    NotNumeric { column: String, dtype: String },

    #[error("Polars error: {0}")]
    Polars(String),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
