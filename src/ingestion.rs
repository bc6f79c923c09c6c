//! CSV ingestion with per-column type inference.
//!
//! Ingestion reads the whole input, infers one [`DataType`] per column, and
//! produces a typed [`DataSet`]. Inference priority is Int64 → Float64 →
//! Utf8: a column becomes Int64 only if every usable cell parses as an
//! integer, Float64 if every usable cell parses as a real number, and Utf8
//! otherwise. A recognized set of null markers (empty cells, `NA`, `null`,
//! ...) maps to [`Value::Null`] and does not participate in inference.
//!
//! Rules:
//!
//! - CSV must have a header row; header names become column names.
//! - Path-based ingestion accepts only `.csv` files (case-insensitive).
//! - A column with no usable cells at all infers as Float64.

use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Cell spellings treated as missing values.
const NULL_MARKERS: &[&str] = &[
    "", "NA", "N/A", "na", "n/a", "null", "NULL", "None", "none", "NaN", "nan",
];

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Paths without a `.csv` extension are rejected up front with
/// [`AnalysisError::UnsupportedFileType`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> AnalysisResult<DataSet> {
    let path = path.as_ref();
    if !has_csv_extension(path) {
        return Err(AnalysisError::UnsupportedFileType {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> AnalysisResult<DataSet> {
    let headers = rdr.headers()?.clone();

    let mut records: Vec<csv::StringRecord> = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }

    let column_types = infer_column_types(headers.len(), &records);

    let fields = headers
        .iter()
        .zip(column_types.iter())
        .map(|(name, data_type)| Field::new(name, *data_type))
        .collect();

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        let mut row = Vec::with_capacity(headers.len());
        for (idx, data_type) in column_types.iter().enumerate() {
            row.push(typed_cell(record.get(idx).unwrap_or(""), *data_type));
        }
        rows.push(row);
    }

    Ok(DataSet::new(Schema::new(fields), rows))
}

/// Ingest CSV data held in a string.
///
/// ```
/// use dataset_insights::ingestion::ingest_csv_from_str;
/// use dataset_insights::types::DataType;
///
/// let ds = ingest_csv_from_str("region,revenue\nNorth,10\nSouth,12.5\n").unwrap();
/// assert_eq!(ds.row_count(), 2);
/// assert_eq!(ds.schema.fields[0].data_type, DataType::Utf8);
/// assert_eq!(ds.schema.fields[1].data_type, DataType::Float64);
/// ```
pub fn ingest_csv_from_str(input: &str) -> AnalysisResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    ingest_csv_from_reader(&mut rdr)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn is_null_marker(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}

/// Decide one [`DataType`] per column from the raw records.
///
/// A single non-conforming cell demotes the whole column: numeric columns
/// must be uniformly numeric.
fn infer_column_types(column_count: usize, records: &[csv::StringRecord]) -> Vec<DataType> {
    let mut int_ok = vec![true; column_count];
    let mut float_ok = vec![true; column_count];
    let mut saw_value = vec![false; column_count];

    for record in records {
        for idx in 0..column_count {
            let cell = record.get(idx).unwrap_or("").trim();
            if is_null_marker(cell) {
                continue;
            }
            saw_value[idx] = true;
            if int_ok[idx] && cell.parse::<i64>().is_err() {
                int_ok[idx] = false;
            }
            if float_ok[idx] && cell.parse::<f64>().is_err() {
                float_ok[idx] = false;
            }
        }
    }

    (0..column_count)
        .map(|idx| {
            if !saw_value[idx] {
                // All-null columns stay numeric so they do not masquerade
                // as categorical.
                DataType::Float64
            } else if int_ok[idx] {
                DataType::Int64
            } else if float_ok[idx] {
                DataType::Float64
            } else {
                DataType::Utf8
            }
        })
        .collect()
}

fn typed_cell(raw: &str, data_type: DataType) -> Value {
    let cell = raw.trim();
    if is_null_marker(cell) {
        return Value::Null;
    }

    match data_type {
        DataType::Int64 => cell.parse::<i64>().map(Value::Int64).unwrap_or(Value::Null),
        DataType::Float64 => cell
            .parse::<f64>()
            .map(Value::Float64)
            .unwrap_or(Value::Null),
        DataType::Utf8 => Value::Utf8(cell.to_owned()),
    }
}
