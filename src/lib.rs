//! `dataset-insights` is a small library that ingests a CSV file into an
//! in-memory [`types::DataSet`], validates its shape, and computes six
//! descriptive statistical patterns over the first numeric and first
//! categorical column, each annotated with a templated natural-language
//! insight sentence.
//!
//! The primary entrypoint is [`report::analyze_csv_from_path`], which chains
//! ingestion, validation, and pattern analysis. Each stage is also usable
//! on its own.
//!
//! ## Pipeline
//!
//! 1. **Ingestion** ([`ingestion`]): CSV with a header row; per-column types
//!    are inferred (Int64 → Float64 → Utf8). Only `.csv` paths are
//!    accepted by the path-based entrypoint.
//! 2. **Validation** ([`validation`]): more than 10 rows, at least one
//!    numeric and one categorical column. Rejections come back as data
//!    with a human-readable reason, not as errors.
//! 3. **Patterns** ([`patterns`]): comparison, trend, correlation,
//!    distribution, anomaly, threshold — six pure functions, each
//!    producing a tagged [`patterns::Pattern`].
//! 4. **Report** ([`report`]): the assembled [`report::AnalysisReport`],
//!    serializing to `{"valid": ..., "message": ..., "patterns": {...}}`.
//!
//! ## Quick example
//!
//! ```
//! use dataset_insights::ingestion::ingest_csv_from_str;
//! use dataset_insights::report::analyze;
//!
//! let mut csv = String::from("region,revenue\n");
//! for (i, region) in ["North", "South"].iter().cycle().take(12).enumerate() {
//!     csv.push_str(&format!("{region},{}\n", 100 + i));
//! }
//!
//! let dataset = ingest_csv_from_str(&csv)?;
//! let report = analyze(&dataset)?;
//! assert!(report.is_valid());
//! # Ok::<(), dataset_insights::AnalysisError>(())
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV ingestion with per-column type inference
//! - [`types`]: schema + in-memory dataset types
//! - [`validation`]: dataset shape rules and the accept/reject summary
//! - [`patterns`]: the six pattern computations
//! - [`report`]: pipeline orchestration and the serialized report
//! - [`observability`]: observer hooks for logging and alerting
//! - [`error`]: error types used across the pipeline

pub mod error;
pub mod ingestion;
pub mod observability;
pub mod patterns;
pub mod report;
pub mod types;
pub mod validation;

pub use error::{AnalysisError, AnalysisResult};
