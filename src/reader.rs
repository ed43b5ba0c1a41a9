//! Line-delimited JSON ingestion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{FeatureError, Result};
use crate::record::BusinessRecord;

/// Read every business record from a line-delimited JSON file.
///
/// The file handle is closed when this returns, whether parsing succeeded
/// or not. Blank lines are skipped; the first malformed line aborts the
/// whole read.
pub fn read_business_file(path: impl AsRef<Path>) -> Result<Vec<BusinessRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening business file");

    let file = File::open(path).map_err(|source| FeatureError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_business_records(BufReader::new(file))?;
    info!(path = %path.display(), records = records.len(), "parsed business file");
    Ok(records)
}

/// Parse business records from any buffered line source, one JSON object
/// per non-empty line, preserving input order.
pub fn read_business_records<R: BufRead>(reader: R) -> Result<Vec<BusinessRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(&line)
            .map_err(|source| FeatureError::Parse {
                line: line_no,
                source,
            })?;
        records.push(BusinessRecord::from_value(value, line_no)?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_one_record_per_line_in_order() {
        let input = concat!(
            "{\"business_id\": \"A\", \"review_count\": 0}\n",
            "{\"business_id\": \"B\", \"review_count\": 9}\n",
            "{\"business_id\": \"C\", \"review_count\": 99}\n",
        );

        let records = read_business_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 3);
        let ids: Vec<String> = records
            .iter()
            .map(|r| r.get("business_id").unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn skips_blank_lines() {
        let input = "{\"review_count\": 1}\n\n   \n{\"review_count\": 2}\n";
        let records = read_business_records(Cursor::new(input)).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn malformed_line_aborts_with_line_number() {
        let input = "{\"review_count\": 1}\n{not json}\n{\"review_count\": 2}\n";
        let err = read_business_records(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, FeatureError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_object_line_aborts() {
        let input = "{\"review_count\": 1}\n[1, 2]\n";
        let err = read_business_records(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::NotAnObject {
                line: 2,
                found: "an array"
            }
        ));
    }
}
