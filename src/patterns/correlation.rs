//! Sequence correlation pattern.

use super::{numeric_column_index, round2, Pattern};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{DataSet, Value};

/// Pearson correlation between a numeric column and row position.
///
/// Each non-null value is paired with its 0-based row ordinal. A coefficient
/// that is undefined (constant values give a zero denominator) is reported
/// as 0.0, and anything not strictly positive takes the
/// negative-correlation phrasing.
pub fn correlation(dataset: &DataSet, value_column: &str) -> AnalysisResult<Pattern> {
    let idx = numeric_column_index(dataset, value_column)?;

    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(dataset.row_count());
    for (position, row) in dataset.rows.iter().enumerate() {
        if let Some(value) = row.get(idx).and_then(Value::as_f64) {
            pairs.push((position as f64, value));
        }
    }
    if pairs.is_empty() {
        return Err(AnalysisError::EmptyColumn {
            column: value_column.to_owned(),
        });
    }

    let coefficient = pearson(&pairs);
    let insight = if coefficient > 0.0 {
        "A positive correlation is observed between the values and their sequence."
    } else {
        "A negative correlation is observed between the values and their sequence."
    };

    Ok(Pattern::Correlation {
        correlation_value: round2(coefficient),
        insight: insight.to_owned(),
    })
}

fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        covariance / denominator
    }
}
