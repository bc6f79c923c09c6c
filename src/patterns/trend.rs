//! Endpoint trend pattern.

use serde::Serialize;

use super::{numeric_series, Pattern};
use crate::error::AnalysisResult;
use crate::types::DataSet;

/// Direction of a column's movement between its first and last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Last value above the first.
    Upward,
    /// Last value below the first.
    Downward,
    /// Endpoints are equal.
    Stable,
}

impl TrendDirection {
    /// Lowercase label used in insight text.
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Upward => "upward",
            TrendDirection::Downward => "downward",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Classify the trend of a numeric column from its endpoints.
///
/// Only the first and last values are compared; interior movement does not
/// matter. The full (unrounded) value sequence is returned alongside the
/// direction.
pub fn trend(dataset: &DataSet, value_column: &str) -> AnalysisResult<Pattern> {
    let values = numeric_series(dataset, value_column)?;
    let first = values[0];
    let last = values[values.len() - 1];

    let direction = if last > first {
        TrendDirection::Upward
    } else if last < first {
        TrendDirection::Downward
    } else {
        TrendDirection::Stable
    };

    let label = direction.label();
    let insight = format!(
        "The trend analysis indicates {} {label} trend over the dataset.",
        article_for(label)
    );

    Ok(Pattern::Trend {
        values,
        trend: direction,
        insight,
    })
}

/// Indefinite article for a word, chosen by leading vowel.
fn article_for(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
