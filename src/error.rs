use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion and analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type shared across ingestion, validation, and pattern analysis.
///
/// Validation *rejections* are not errors — they come back as data (see
/// [`crate::validation::Validation`]). The variants here are either
/// infrastructure failures during ingestion, or contract violations inside
/// the pattern engine, which is only defined for datasets that passed
/// validation.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input path does not have a `.csv` extension.
    ///
    /// The display text is the exact message surfaced to callers.
    #[error("Only CSV files are supported")]
    UnsupportedFileType {
        /// The rejected path.
        path: PathBuf,
    },

    /// A pattern was asked for a column that does not exist in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// A pattern needing a numeric column was handed a categorical one.
    #[error("column '{column}' is not numeric")]
    NotNumeric { column: String },

    /// A column has no usable (non-null) values.
    #[error("column '{column}' has no usable values")]
    EmptyColumn { column: String },

    /// A column has too few usable values for the requested statistic.
    #[error("column '{column}' has too few values for this analysis")]
    InsufficientData { column: String },
}
