//! Column type inference over schema-less records.
//!
//! The input carries no declared schema, so column types are inferred
//! from the values actually observed before the table is assembled.

use std::collections::HashMap;

use serde_json::Value;

use crate::record::BusinessRecord;

/// Column type for the assembled table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Bool,
    Str,
    /// Nested arrays/objects, carried as their JSON text.
    Json,
}

impl ColumnType {
    /// Widen two observed types into one column type.
    fn merge(self, other: ColumnType) -> ColumnType {
        use ColumnType::*;
        match (self, other) {
            (a, b) if a == b => a,
            (Int, Float) | (Float, Int) => Float,
            (Str, Int | Float | Bool) | (Int | Float | Bool, Str) => Str,
            _ => Json,
        }
    }
}

/// One inferred column.
#[derive(Clone, Debug)]
pub struct InferredColumn {
    pub name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
}

/// Inferred table schema: one column per distinct field name, in
/// first-seen order across the input records.
#[derive(Clone, Debug, Default)]
pub struct TableSchema {
    columns: Vec<InferredColumn>,
}

struct ColumnState {
    name: String,
    column_type: Option<ColumnType>,
    saw_null: bool,
    seen: usize,
}

impl TableSchema {
    /// One pass over all records. A field that is absent from some record,
    /// or explicitly null, makes its column nullable. A column observed
    /// only as null falls back to a string column.
    pub fn infer(records: &[BusinessRecord]) -> Self {
        let mut states: Vec<ColumnState> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            for (name, value) in record.fields() {
                let idx = *index.entry(name.clone()).or_insert_with(|| {
                    states.push(ColumnState {
                        name: name.clone(),
                        column_type: None,
                        saw_null: false,
                        seen: 0,
                    });
                    states.len() - 1
                });

                let state = &mut states[idx];
                state.seen += 1;
                match value_type(value) {
                    None => state.saw_null = true,
                    Some(observed) => {
                        state.column_type = Some(match state.column_type {
                            None => observed,
                            Some(current) => current.merge(observed),
                        });
                    }
                }
            }
        }

        let total = records.len();
        let columns = states
            .into_iter()
            .map(|state| InferredColumn {
                name: state.name,
                column_type: state.column_type.unwrap_or(ColumnType::Str),
                nullable: state.saw_null || state.seen < total,
            })
            .collect();

        Self { columns }
    }

    pub fn columns(&self) -> &[InferredColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn value_type(value: &Value) -> Option<ColumnType> {
    match value {
        Value::Null => None,
        Value::Bool(_) => Some(ColumnType::Bool),
        // i64-representable numbers stay integer columns; anything wider
        // (fractions, u64 beyond i64::MAX) widens to float.
        Value::Number(n) => Some(if n.as_i64().is_some() {
            ColumnType::Int
        } else {
            ColumnType::Float
        }),
        Value::String(_) => Some(ColumnType::Str),
        Value::Array(_) | Value::Object(_) => Some(ColumnType::Json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BusinessRecord;
    use serde_json::json;

    fn records(values: &[serde_json::Value]) -> Vec<BusinessRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| BusinessRecord::from_value(v.clone(), i + 1).unwrap())
            .collect()
    }

    #[test]
    fn columns_keep_first_seen_order() {
        let recs = records(&[
            json!({"business_id": "A", "review_count": 1}),
            json!({"business_id": "B", "review_count": 2, "city": "Reno"}),
        ]);

        let schema = TableSchema::infer(&recs);
        let names: Vec<&str> = schema.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["business_id", "review_count", "city"]);
    }

    #[test]
    fn int_and_float_merge_to_float() {
        let recs = records(&[json!({"stars": 4}), json!({"stars": 4.5})]);
        let schema = TableSchema::infer(&recs);
        assert_eq!(schema.columns()[0].column_type, ColumnType::Float);
    }

    #[test]
    fn string_conflicts_widen_to_string() {
        let recs = records(&[json!({"v": "open"}), json!({"v": 1})]);
        let schema = TableSchema::infer(&recs);
        assert_eq!(schema.columns()[0].column_type, ColumnType::Str);
    }

    #[test]
    fn other_conflicts_widen_to_json() {
        let recs = records(&[json!({"v": true}), json!({"v": 1})]);
        let schema = TableSchema::infer(&recs);
        assert_eq!(schema.columns()[0].column_type, ColumnType::Json);
    }

    #[test]
    fn nested_values_are_json_columns() {
        let recs = records(&[json!({"attributes": {"parking": true}})]);
        let schema = TableSchema::infer(&recs);
        assert_eq!(schema.columns()[0].column_type, ColumnType::Json);
    }

    #[test]
    fn absent_field_makes_column_nullable() {
        let recs = records(&[
            json!({"business_id": "A", "city": "Reno"}),
            json!({"business_id": "B"}),
        ]);

        let schema = TableSchema::infer(&recs);
        let city = &schema.columns()[1];
        assert_eq!(city.name, "city");
        assert!(city.nullable);
        assert!(!schema.columns()[0].nullable);
    }

    #[test]
    fn null_only_column_falls_back_to_string() {
        let recs = records(&[json!({"hours": null})]);
        let schema = TableSchema::infer(&recs);
        assert_eq!(schema.columns()[0].column_type, ColumnType::Str);
        assert!(schema.columns()[0].nullable);
    }
}
