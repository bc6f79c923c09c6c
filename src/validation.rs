//! Dataset shape validation.
//!
//! [`validate`] classifies a dataset as acceptable for pattern analysis or
//! rejects it with a human-readable reason. Rules run in order and the
//! first failure wins:
//!
//! 1. more than 10 rows
//! 2. at least one numeric column
//! 3. at least one categorical column
//!
//! Rejection is final for the dataset at hand; there is no partial
//! acceptance. On success the summary carries the full ordered numeric and
//! categorical column partitions — choosing which columns to analyze is the
//! caller's job, not the validator's.

use serde::Serialize;

use crate::types::DataSet;

/// Exclusive row-count floor: a dataset must have strictly more rows.
const MIN_ROW_COUNT: usize = 10;

/// Shape summary of an accepted dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Number of rows in the dataset.
    pub row_count: usize,
    /// Names of numeric columns, in schema order.
    pub numeric_columns: Vec<String>,
    /// Names of categorical columns, in schema order.
    pub categorical_columns: Vec<String>,
}

/// Outcome of [`validate`]: exactly one of a summary or a rejection reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The dataset satisfies every rule.
    Accepted(ValidationSummary),
    /// The dataset broke a rule; `message` names which one.
    Rejected {
        /// Human-readable rejection reason, surfaced verbatim to callers.
        message: String,
    },
}

impl Validation {
    /// Whether the dataset was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted(_))
    }
}

/// Validate a dataset for pattern analysis.
pub fn validate(dataset: &DataSet) -> Validation {
    if dataset.row_count() <= MIN_ROW_COUNT {
        return Validation::Rejected {
            message: "Dataset must contain more than 10 rows".to_string(),
        };
    }

    let mut numeric_columns = Vec::new();
    let mut categorical_columns = Vec::new();
    for field in &dataset.schema.fields {
        if field.data_type.is_numeric() {
            numeric_columns.push(field.name.clone());
        } else {
            categorical_columns.push(field.name.clone());
        }
    }

    if numeric_columns.is_empty() {
        return Validation::Rejected {
            message: "Dataset must contain at least one numerical column".to_string(),
        };
    }
    if categorical_columns.is_empty() {
        return Validation::Rejected {
            message: "Dataset must contain at least one categorical column".to_string(),
        };
    }

    Validation::Accepted(ValidationSummary {
        row_count: dataset.row_count(),
        numeric_columns,
        categorical_columns,
    })
}

#[cfg(test)]
mod tests {
    use super::{validate, Validation};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn dataset(rows: usize, fields: Vec<Field>) -> DataSet {
        let row: Vec<Value> = fields
            .iter()
            .map(|f| match f.data_type {
                DataType::Int64 => Value::Int64(1),
                DataType::Float64 => Value::Float64(1.0),
                DataType::Utf8 => Value::Utf8("x".to_string()),
            })
            .collect();
        DataSet::new(Schema::new(fields), vec![row; rows])
    }

    fn mixed_fields() -> Vec<Field> {
        vec![
            Field::new("region", DataType::Utf8),
            Field::new("revenue", DataType::Float64),
        ]
    }

    fn rejection_message(v: Validation) -> String {
        match v {
            Validation::Rejected { message } => message,
            Validation::Accepted(_) => panic!("expected rejection"),
        }
    }

    #[test]
    fn exactly_ten_rows_is_rejected() {
        let v = validate(&dataset(10, mixed_fields()));
        assert_eq!(
            rejection_message(v),
            "Dataset must contain more than 10 rows"
        );
    }

    #[test]
    fn eleven_rows_is_accepted() {
        let v = validate(&dataset(11, mixed_fields()));
        assert!(v.is_accepted());
    }

    #[test]
    fn row_count_rule_wins_over_column_rules() {
        // Too few rows AND no numeric column: the row-count message wins.
        let v = validate(&dataset(3, vec![Field::new("region", DataType::Utf8)]));
        assert_eq!(
            rejection_message(v),
            "Dataset must contain more than 10 rows"
        );
    }

    #[test]
    fn missing_numeric_column_is_rejected() {
        let fields = vec![
            Field::new("region", DataType::Utf8),
            Field::new("city", DataType::Utf8),
        ];
        let v = validate(&dataset(12, fields));
        assert_eq!(
            rejection_message(v),
            "Dataset must contain at least one numerical column"
        );
    }

    #[test]
    fn missing_categorical_column_is_rejected() {
        let fields = vec![
            Field::new("revenue", DataType::Float64),
            Field::new("units", DataType::Int64),
        ];
        let v = validate(&dataset(12, fields));
        assert_eq!(
            rejection_message(v),
            "Dataset must contain at least one categorical column"
        );
    }

    #[test]
    fn summary_partitions_all_columns_without_overlap() {
        let fields = vec![
            Field::new("region", DataType::Utf8),
            Field::new("revenue", DataType::Float64),
            Field::new("units", DataType::Int64),
            Field::new("city", DataType::Utf8),
        ];
        let summary = match validate(&dataset(12, fields)) {
            Validation::Accepted(s) => s,
            Validation::Rejected { message } => panic!("unexpected rejection: {message}"),
        };

        assert_eq!(summary.row_count, 12);
        assert_eq!(summary.numeric_columns, vec!["revenue", "units"]);
        assert_eq!(summary.categorical_columns, vec!["region", "city"]);

        // Partition property: together they cover every column exactly once.
        let mut all: Vec<String> = summary
            .numeric_columns
            .iter()
            .chain(summary.categorical_columns.iter())
            .cloned()
            .collect();
        all.sort();
        assert_eq!(all, vec!["city", "region", "revenue", "units"]);
    }
}
