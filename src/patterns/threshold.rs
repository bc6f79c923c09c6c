//! Threshold pattern.

use super::{mean, numeric_series, round2, Pattern};
use crate::error::AnalysisResult;
use crate::types::DataSet;

/// Count values strictly below a cutoff.
///
/// With no explicit cutoff the column mean is used. The comparison runs
/// against the unrounded cutoff; only the reported value is rounded.
pub fn threshold(
    dataset: &DataSet,
    value_column: &str,
    cutoff: Option<f64>,
) -> AnalysisResult<Pattern> {
    let values = numeric_series(dataset, value_column)?;
    let cutoff = match cutoff {
        Some(t) => t,
        None => mean(&values),
    };

    let below_threshold_count = values.iter().filter(|v| **v < cutoff).count();

    let insight = if below_threshold_count > 0 {
        "Several values fall below the defined threshold, indicating underperformance."
    } else {
        "All values are above the defined threshold."
    };

    Ok(Pattern::Threshold {
        threshold: round2(cutoff),
        below_threshold_count,
        insight: insight.to_owned(),
    })
}
