//! Descriptive pattern analyses over a [`DataSet`].
//!
//! Six independent, stateless functions, each consuming a dataset plus one
//! or two column names and producing a [`Pattern`] carrying the numeric
//! findings and a templated insight sentence:
//!
//! - [`comparison()`]: per-category means, best and worst group
//! - [`trend()`]: endpoint direction (first value vs last value)
//! - [`correlation()`]: Pearson coefficient against row position
//! - [`distribution()`]: column mean
//! - [`anomaly()`]: count of values above mean + 2 sigma
//! - [`threshold()`]: count of values below a cutoff
//!
//! The functions assume their columns were vetted by
//! [`crate::validation::validate`]; handed anything else they return a typed
//! error rather than a fabricated insight. Null cells are skipped by every
//! computation.

pub mod anomaly;
pub mod comparison;
pub mod correlation;
pub mod distribution;
pub mod threshold;
pub mod trend;

pub use anomaly::anomaly;
pub use comparison::comparison;
pub use correlation::correlation;
pub use distribution::distribution;
pub use threshold::threshold;
pub use trend::{trend, TrendDirection};

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{DataSet, Value};

/// One computed pattern, tagged by kind.
///
/// Serializes with a `type` tag alongside the pattern-specific fields, e.g.
/// `{"type":"distribution","mean":3.5,"insight":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pattern {
    /// Per-category means of a numeric column.
    Comparison {
        /// Group labels in sorted key order.
        categories: Vec<String>,
        /// Per-group means, rounded to 2 decimals, same order as `categories`.
        values: Vec<f64>,
        /// Label of the group with the highest mean.
        best_category: String,
        /// Label of the group with the lowest mean.
        worst_category: String,
        /// Templated insight sentence.
        insight: String,
    },
    /// Endpoint-to-endpoint direction of a numeric column.
    Trend {
        /// The full (unrounded) value sequence.
        values: Vec<f64>,
        /// Direction between the first and last value.
        trend: TrendDirection,
        /// Templated insight sentence.
        insight: String,
    },
    /// Pearson correlation between a numeric column and row position.
    Correlation {
        /// Coefficient rounded to 2 decimals.
        correlation_value: f64,
        /// Templated insight sentence.
        insight: String,
    },
    /// Central tendency of a numeric column.
    Distribution {
        /// Column mean rounded to 2 decimals.
        mean: f64,
        /// Fixed insight sentence.
        insight: String,
    },
    /// Upper-tail outlier count of a numeric column.
    Anomaly {
        /// Number of values above mean + 2 standard deviations.
        anomaly_count: usize,
        /// Templated insight sentence.
        insight: String,
    },
    /// Count of values below a cutoff.
    Threshold {
        /// The cutoff used, rounded to 2 decimals.
        threshold: f64,
        /// Number of values strictly below the cutoff.
        below_threshold_count: usize,
        /// Templated insight sentence.
        insight: String,
    },
}

/// Resolve a column name to its index, requiring a numeric type.
pub(crate) fn numeric_column_index(dataset: &DataSet, column: &str) -> AnalysisResult<usize> {
    let idx = dataset
        .schema
        .index_of(column)
        .ok_or_else(|| AnalysisError::ColumnNotFound {
            column: column.to_owned(),
        })?;
    if !dataset.schema.fields[idx].data_type.is_numeric() {
        return Err(AnalysisError::NotNumeric {
            column: column.to_owned(),
        });
    }
    Ok(idx)
}

/// Collect the non-null values of a numeric column, in row order.
///
/// Errors if the column is missing, not numeric, or has no usable values.
pub(crate) fn numeric_series(dataset: &DataSet, column: &str) -> AnalysisResult<Vec<f64>> {
    let idx = numeric_column_index(dataset, column)?;

    let mut values = Vec::with_capacity(dataset.row_count());
    for row in &dataset.rows {
        if let Some(v) = row.get(idx).and_then(Value::as_f64) {
            values.push(v);
        }
    }

    if values.is_empty() {
        return Err(AnalysisError::EmptyColumn {
            column: column.to_owned(),
        });
    }
    Ok(values)
}

/// Arithmetic mean. Callers guarantee `values` is non-empty.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator). Callers guarantee at least
/// two values.
pub(crate) fn sample_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let sum_sq = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Round to two decimal places for reporting.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
