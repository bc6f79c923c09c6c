//! Full analysis pipeline: validate, pick columns, run every pattern.
//!
//! [`analyze`] is the caller-side orchestration over the pattern engine: it
//! validates the dataset, picks the first numeric and first categorical
//! column from the validation summary, and runs all six patterns.
//! [`analyze_csv_from_path`] additionally owns ingestion and reports
//! progress to an optional [`PipelineObserver`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::error::AnalysisResult;
use crate::ingestion::ingest_csv_from_path;
use crate::observability::{
    severity_for_error, DatasetStats, PipelineContext, PipelineObserver, Severity,
};
use crate::patterns::{
    anomaly, comparison, correlation, distribution, threshold, trend, Pattern,
};
use crate::types::DataSet;
use crate::validation::{validate, Validation};

/// Message attached to an accepted report.
const SUCCESS_MESSAGE: &str = "Dataset processed successfully";

/// All six computed patterns, keyed by name in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSet {
    /// Per-category comparison.
    pub comparison: Pattern,
    /// Endpoint trend.
    pub trend: Pattern,
    /// Sequence correlation.
    pub correlation: Pattern,
    /// Value distribution.
    pub distribution: Pattern,
    /// Upper-tail anomalies.
    pub anomaly: Pattern,
    /// Below-threshold count.
    pub threshold: Pattern,
}

/// Outcome of a full analysis run.
///
/// Serializes to `{"valid": false, "message": ...}` for a rejected dataset,
/// or `{"valid": true, "message": ..., "patterns": {...}}` for an accepted
/// one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    /// Validation rejected the dataset.
    Rejected {
        /// Always `false`; serialized for the wire contract.
        valid: bool,
        /// The rejection reason, verbatim from validation.
        message: String,
    },
    /// Validation accepted the dataset and every pattern was computed.
    Completed {
        /// Always `true`; serialized for the wire contract.
        valid: bool,
        /// Fixed success message.
        message: String,
        /// The six computed patterns.
        patterns: PatternSet,
    },
}

impl AnalysisReport {
    fn rejected(message: String) -> Self {
        Self::Rejected {
            valid: false,
            message,
        }
    }

    fn completed(patterns: PatternSet) -> Self {
        Self::Completed {
            valid: true,
            message: SUCCESS_MESSAGE.to_owned(),
            patterns,
        }
    }

    /// Whether the dataset passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Validate a dataset and compute all six patterns.
///
/// Column selection: the first numeric column feeds every pattern and the
/// first categorical column feeds the comparison grouping. Callers that
/// want different columns can run the pattern functions directly.
pub fn analyze(dataset: &DataSet) -> AnalysisResult<AnalysisReport> {
    let summary = match validate(dataset) {
        Validation::Rejected { message } => return Ok(AnalysisReport::rejected(message)),
        Validation::Accepted(summary) => summary,
    };

    // Both partitions are non-empty on any accepted dataset.
    let value_column = summary.numeric_columns[0].as_str();
    let category_column = summary.categorical_columns[0].as_str();

    let patterns = PatternSet {
        comparison: comparison(dataset, category_column, value_column)?,
        trend: trend(dataset, value_column)?,
        correlation: correlation(dataset, value_column)?,
        distribution: distribution(dataset, value_column)?,
        anomaly: anomaly(dataset, value_column)?,
        threshold: threshold(dataset, value_column, None)?,
    };

    Ok(AnalysisReport::completed(patterns))
}

/// Options controlling [`analyze_csv_from_path`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct AnalysisOptions {
    /// Optional observer for pipeline events.
    pub observer: Option<Arc<dyn PipelineObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Ingest a CSV file and run the full analysis pipeline.
///
/// When an observer is configured, this function reports:
///
/// - `on_ingested` once a dataset exists, with row/column stats
/// - `on_rejected` or `on_completed` depending on validation
/// - `on_failure` on error, plus `on_alert` when the computed severity is
///   at or above `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use dataset_insights::report::{analyze_csv_from_path, AnalysisOptions};
///
/// # fn main() -> Result<(), dataset_insights::AnalysisError> {
/// let report = analyze_csv_from_path("sales.csv", &AnalysisOptions::default())?;
/// println!("{}", serde_json::to_string_pretty(&report).unwrap());
/// # Ok(())
/// # }
/// ```
pub fn analyze_csv_from_path(
    path: impl AsRef<Path>,
    options: &AnalysisOptions,
) -> AnalysisResult<AnalysisReport> {
    let path = path.as_ref();
    let ctx = PipelineContext {
        path: path.to_path_buf(),
    };

    let result = run_pipeline(path, &ctx, options);

    if let (Err(error), Some(obs)) = (&result, options.observer.as_ref()) {
        let severity = severity_for_error(error);
        obs.on_failure(&ctx, severity, error);
        if severity >= options.alert_at_or_above {
            obs.on_alert(&ctx, severity, error);
        }
    }

    result
}

fn run_pipeline(
    path: &Path,
    ctx: &PipelineContext,
    options: &AnalysisOptions,
) -> AnalysisResult<AnalysisReport> {
    let dataset = ingest_csv_from_path(path)?;
    let stats = DatasetStats {
        rows: dataset.row_count(),
        columns: dataset.column_count(),
    };
    if let Some(obs) = options.observer.as_ref() {
        obs.on_ingested(ctx, stats);
    }

    let report = analyze(&dataset)?;

    if let Some(obs) = options.observer.as_ref() {
        match &report {
            AnalysisReport::Rejected { message, .. } => obs.on_rejected(ctx, message),
            AnalysisReport::Completed { .. } => obs.on_completed(ctx, stats),
        }
    }

    Ok(report)
}
