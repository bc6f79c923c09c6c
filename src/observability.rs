//! Observer hooks for the ingest → validate → analyze pipeline.
//!
//! There is no logging framework in this crate; callers that want logs,
//! metrics, or alerts attach a [`PipelineObserver`] via
//! [`crate::report::AnalysisOptions`]. Built-in implementations:
//!
//! - [`StdErrObserver`]: line-per-event logging to stderr
//! - [`FileObserver`]: appends events to a local log file
//! - [`CompositeObserver`]: fans out to a list of observers

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AnalysisError;

/// Severity classification used for observer callbacks and alert thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// A user mistake the caller can correct (e.g. wrong file type).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Infrastructure failure, or a pattern computed against a dataset that
    /// validation never accepted.
    Critical,
}

/// Classify an error for observer reporting.
pub fn severity_for_error(error: &AnalysisError) -> Severity {
    match error {
        AnalysisError::Io(_) => Severity::Critical,
        AnalysisError::Csv(err) => match err.kind() {
            csv::ErrorKind::Io(_) => Severity::Critical,
            _ => Severity::Error,
        },
        AnalysisError::UnsupportedFileType { .. } => Severity::Warning,
        // Contract violations: analysis ran against a dataset/column pair
        // that validation never vouched for.
        AnalysisError::ColumnNotFound { .. }
        | AnalysisError::NotNumeric { .. }
        | AnalysisError::EmptyColumn { .. }
        | AnalysisError::InsufficientData { .. } => Severity::Critical,
    }
}

/// Context about one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// The input path the run started from.
    pub path: PathBuf,
}

/// Shape stats reported once ingestion has produced a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    /// Number of ingested rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

/// Observer interface for pipeline outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts. All methods
/// have empty defaults, so an observer only implements what it cares about.
pub trait PipelineObserver: Send + Sync {
    /// Called when ingestion produced a dataset.
    fn on_ingested(&self, _ctx: &PipelineContext, _stats: DatasetStats) {}

    /// Called when validation rejected the dataset.
    fn on_rejected(&self, _ctx: &PipelineContext, _message: &str) {}

    /// Called when a full pattern report was produced.
    fn on_completed(&self, _ctx: &PipelineContext, _stats: DatasetStats) {}

    /// Called when the pipeline failed with an error.
    fn on_failure(&self, _ctx: &PipelineContext, _severity: Severity, _error: &AnalysisError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_ingested(&self, ctx: &PipelineContext, stats: DatasetStats) {
        for o in &self.observers {
            o.on_ingested(ctx, stats);
        }
    }

    fn on_rejected(&self, ctx: &PipelineContext, message: &str) {
        for o in &self.observers {
            o.on_rejected(ctx, message);
        }
    }

    fn on_completed(&self, ctx: &PipelineContext, stats: DatasetStats) {
        for o in &self.observers {
            o.on_completed(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs pipeline events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl PipelineObserver for StdErrObserver {
    fn on_ingested(&self, ctx: &PipelineContext, stats: DatasetStats) {
        eprintln!(
            "[insights][ingested] path={} rows={} cols={}",
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_rejected(&self, ctx: &PipelineContext, message: &str) {
        eprintln!(
            "[insights][rejected] path={} reason={}",
            ctx.path.display(),
            message
        );
    }

    fn on_completed(&self, ctx: &PipelineContext, stats: DatasetStats) {
        eprintln!(
            "[insights][report] path={} rows={}",
            ctx.path.display(),
            stats.rows
        );
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        eprintln!(
            "[insights][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        eprintln!(
            "[ALERT][insights][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}

/// Appends pipeline events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl PipelineObserver for FileObserver {
    fn on_ingested(&self, ctx: &PipelineContext, stats: DatasetStats) {
        self.append_line(&format!(
            "{} ingested path={} rows={} cols={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows,
            stats.columns
        ));
    }

    fn on_rejected(&self, ctx: &PipelineContext, message: &str) {
        self.append_line(&format!(
            "{} rejected path={} reason={}",
            unix_ts(),
            ctx.path.display(),
            message
        ));
    }

    fn on_completed(&self, ctx: &PipelineContext, stats: DatasetStats) {
        self.append_line(&format!(
            "{} report path={} rows={}",
            unix_ts(),
            ctx.path.display(),
            stats.rows
        ));
    }

    fn on_failure(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &PipelineContext, severity: Severity, error: &AnalysisError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
