//! Upper-tail anomaly pattern.

use super::{mean, numeric_series, sample_std_dev, Pattern};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::DataSet;

/// Count values above mean + 2 standard deviations.
///
/// Uses the sample standard deviation (N-1 denominator). Only the upper
/// tail is checked; values far below the mean are not flagged.
pub fn anomaly(dataset: &DataSet, value_column: &str) -> AnalysisResult<Pattern> {
    let values = numeric_series(dataset, value_column)?;
    if values.len() < 2 {
        // The N-1 denominator needs at least two values.
        return Err(AnalysisError::InsufficientData {
            column: value_column.to_owned(),
        });
    }

    let cutoff = mean(&values) + 2.0 * sample_std_dev(&values);
    let anomaly_count = values.iter().filter(|v| **v > cutoff).count();

    let insight = if anomaly_count > 0 {
        "An unusual spike is detected, indicating a potential anomaly."
    } else {
        "No significant anomalies detected in the dataset."
    };

    Ok(Pattern::Anomaly {
        anomaly_count,
        insight: insight.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::anomaly;
    use crate::error::AnalysisError;
    use crate::patterns::Pattern;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn dataset(values: &[f64]) -> DataSet {
        let schema = Schema::new(vec![Field::new("value", DataType::Float64)]);
        let rows = values.iter().map(|v| vec![Value::Float64(*v)]).collect();
        DataSet::new(schema, rows)
    }

    fn unpack(pattern: Pattern) -> (usize, String) {
        match pattern {
            Pattern::Anomaly {
                anomaly_count,
                insight,
            } => (anomaly_count, insight),
            other => panic!("expected anomaly pattern, got {other:?}"),
        }
    }

    #[test]
    fn sample_std_dev_keeps_borderline_spike_unflagged() {
        // mean = 22, sample std dev ≈ 43.62, cutoff ≈ 109.2: the 100 stays
        // inside. A population (N) denominator would give cutoff ≈ 100.0
        // and flag it — this pins the N-1 formula.
        let ds = dataset(&[1.0, 2.0, 3.0, 4.0, 100.0]);
        let (count, insight) = unpack(anomaly(&ds, "value").unwrap());
        assert_eq!(count, 0);
        assert_eq!(insight, "No significant anomalies detected in the dataset.");
    }

    #[test]
    fn genuine_spike_is_flagged() {
        let mut values = vec![10.0; 20];
        values[7] = 10.5;
        values.push(1000.0);
        let ds = dataset(&values);
        let (count, insight) = unpack(anomaly(&ds, "value").unwrap());
        assert_eq!(count, 1);
        assert_eq!(
            insight,
            "An unusual spike is detected, indicating a potential anomaly."
        );
    }

    #[test]
    fn lower_tail_is_not_checked() {
        let mut values = vec![10.0; 20];
        values[3] = 10.5;
        values.push(-1000.0);
        let ds = dataset(&values);
        let (count, _) = unpack(anomaly(&ds, "value").unwrap());
        assert_eq!(count, 0);
    }

    #[test]
    fn single_value_is_insufficient() {
        let ds = dataset(&[42.0]);
        let err = anomaly(&ds, "value").unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData { .. }));
    }
}
