use std::sync::{Arc, Mutex};

use dataset_insights::observability::{
    DatasetStats, PipelineContext, PipelineObserver, Severity,
};
use dataset_insights::report::{analyze_csv_from_path, AnalysisOptions};
use dataset_insights::AnalysisError;

#[derive(Default)]
struct RecordingObserver {
    ingested: Mutex<Vec<DatasetStats>>,
    rejections: Mutex<Vec<String>>,
    completed: Mutex<Vec<DatasetStats>>,
    failures: Mutex<Vec<Severity>>,
    alerts: Mutex<Vec<Severity>>,
}

impl PipelineObserver for RecordingObserver {
    fn on_ingested(&self, _ctx: &PipelineContext, stats: DatasetStats) {
        self.ingested.lock().unwrap().push(stats);
    }

    fn on_rejected(&self, _ctx: &PipelineContext, message: &str) {
        self.rejections.lock().unwrap().push(message.to_string());
    }

    fn on_completed(&self, _ctx: &PipelineContext, stats: DatasetStats) {
        self.completed.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &PipelineContext, severity: Severity, _error: &AnalysisError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &PipelineContext, severity: Severity, _error: &AnalysisError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(observer: Arc<RecordingObserver>, threshold: Severity) -> AnalysisOptions {
    AnalysisOptions {
        observer: Some(observer),
        alert_at_or_above: threshold,
    }
}

#[test]
fn successful_run_reports_ingested_then_completed() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), Severity::Critical);

    let report = analyze_csv_from_path("tests/fixtures/sales.csv", &opts).unwrap();
    assert!(report.is_valid());

    let expected = DatasetStats {
        rows: 12,
        columns: 3,
    };
    assert_eq!(obs.ingested.lock().unwrap().clone(), vec![expected]);
    assert_eq!(obs.completed.lock().unwrap().clone(), vec![expected]);
    assert!(obs.rejections.lock().unwrap().is_empty());
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn validation_rejection_is_reported_as_data_not_failure() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), Severity::Critical);

    let report = analyze_csv_from_path("tests/fixtures/short.csv", &opts).unwrap();
    assert!(!report.is_valid());

    assert_eq!(
        obs.rejections.lock().unwrap().clone(),
        vec!["Dataset must contain more than 10 rows".to_string()]
    );
    assert!(obs.completed.lock().unwrap().is_empty());
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn missing_file_is_a_critical_failure_with_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), Severity::Critical);

    let _ = analyze_csv_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![Severity::Critical]);
    assert!(obs.ingested.lock().unwrap().is_empty());
}

#[test]
fn wrong_extension_is_a_warning_and_does_not_alert_at_critical() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), Severity::Critical);

    let err = analyze_csv_from_path("tests/fixtures/sales.xlsx", &opts).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFileType { .. }));

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Warning]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lowering_the_threshold_alerts_on_warnings() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), Severity::Warning);

    let _ = analyze_csv_from_path("tests/fixtures/sales.xlsx", &opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![Severity::Warning]);
}
