//! Category comparison pattern.

use std::collections::BTreeMap;

use super::{mean, numeric_column_index, round2, Pattern};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{DataSet, Value};

/// Compare per-category means of a numeric column.
///
/// Rows are grouped by the categorical column and the numeric column is
/// averaged per group. Groups are reported in sorted key order; best and
/// worst are the first strict maximum and minimum in that order, so a tie
/// keeps the earlier key. With a single group, best and worst are the same
/// label. Rows with a null in either column are skipped.
pub fn comparison(
    dataset: &DataSet,
    category_column: &str,
    value_column: &str,
) -> AnalysisResult<Pattern> {
    let cat_idx =
        dataset
            .schema
            .index_of(category_column)
            .ok_or_else(|| AnalysisError::ColumnNotFound {
                column: category_column.to_owned(),
            })?;
    let val_idx = numeric_column_index(dataset, value_column)?;

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for row in &dataset.rows {
        let label = match row.get(cat_idx) {
            Some(v) if !v.is_null() => v.to_string(),
            _ => continue,
        };
        let Some(value) = row.get(val_idx).and_then(Value::as_f64) else {
            continue;
        };
        groups.entry(label).or_default().push(value);
    }

    if groups.is_empty() {
        return Err(AnalysisError::EmptyColumn {
            column: value_column.to_owned(),
        });
    }

    let group_means: Vec<(String, f64)> = groups
        .iter()
        .map(|(label, values)| (label.clone(), mean(values)))
        .collect();

    let mut best = &group_means[0];
    let mut worst = &group_means[0];
    for entry in &group_means[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
        if entry.1 < worst.1 {
            worst = entry;
        }
    }

    let categories: Vec<String> = group_means.iter().map(|(label, _)| label.clone()).collect();
    let values: Vec<f64> = group_means.iter().map(|(_, m)| round2(*m)).collect();
    let insight = format!(
        "From the comparison chart, {} shows higher performance compared to {}.",
        best.0, worst.0
    );

    Ok(Pattern::Comparison {
        categories,
        values,
        best_category: best.0.clone(),
        worst_category: worst.0.clone(),
        insight,
    })
}
