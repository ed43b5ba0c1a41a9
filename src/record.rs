//! Business records - schema-less rows parsed from JSON input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FeatureError, Result};
use crate::features::REVIEW_COUNT;

/// One business record: a parsed JSON object.
///
/// The schema is unknown beyond `review_count`; every other field is
/// carried through untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessRecord {
    fields: Map<String, Value>,
}

impl BusinessRecord {
    /// Wrap a parsed JSON value. Anything other than an object is
    /// rejected; `line` is the 1-based input line the value came from.
    pub fn from_value(value: Value, line: usize) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(FeatureError::NotAnObject {
                line,
                found: json_type_name(&other),
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field names and values in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The review count of this record as a number.
    ///
    /// `row` is the 0-based row index, used only for error reporting.
    pub fn review_count(&self, row: usize) -> Result<f64> {
        match self.fields.get(REVIEW_COUNT) {
            None | Some(Value::Null) => Err(FeatureError::MissingField {
                field: REVIEW_COUNT.to_string(),
                row,
            }),
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| FeatureError::NotNumeric {
                column: REVIEW_COUNT.to_string(),
                dtype: "a number out of range".to_string(),
            }),
            Some(other) => Err(FeatureError::NotNumeric {
                column: REVIEW_COUNT.to_string(),
                dtype: json_type_name(other).to_string(),
            }),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
