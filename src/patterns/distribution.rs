//! Value distribution pattern.

use super::{mean, numeric_series, round2, Pattern};
use crate::error::AnalysisResult;
use crate::types::DataSet;

/// The insight text is fixed; it does not branch on distribution shape.
const DISTRIBUTION_INSIGHT: &str = "Most values are concentrated around the average range.";

/// Report the mean of a numeric column.
pub fn distribution(dataset: &DataSet, value_column: &str) -> AnalysisResult<Pattern> {
    let values = numeric_series(dataset, value_column)?;

    Ok(Pattern::Distribution {
        mean: round2(mean(&values)),
        insight: DISTRIBUTION_INSIGHT.to_owned(),
    })
}
