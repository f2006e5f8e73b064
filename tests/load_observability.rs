use std::io::Write;
use std::sync::{Arc, Mutex};

use ridership_stats::ingestion::{
    load_table, LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats, TracingObserver,
};
use ridership_stats::RidershipError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats.rows);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &RidershipError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &RidershipError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

/// A CSV whose second record is not valid UTF-8.
fn invalid_utf8_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"line,ons\nGreen,10\n\xff\xfe,4\n").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn observer_receives_row_count_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        ..Default::default()
    };

    let t = load_table("tests/fixtures/ridership.csv", &opts).unwrap();

    assert_eq!(*obs.successes.lock().unwrap(), vec![t.row_count()]);
    assert!(obs.failures.lock().unwrap().is_empty());
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
    };

    // Missing file -> Io -> Critical
    let _ = load_table("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_bad_content() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Critical,
    };
    let file = invalid_utf8_file();

    let err = load_table(file.path(), &opts).unwrap_err();

    assert!(matches!(err, RidershipError::Csv(_)));
    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn lower_threshold_alerts_on_bad_content() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: LoadSeverity::Error,
    };
    let file = invalid_utf8_file();

    let _ = load_table(file.path(), &opts).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Error]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![LoadSeverity::Error]);
}

#[test]
fn tracing_observer_handles_every_outcome() {
    let opts = LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        alert_at_or_above: LoadSeverity::Error,
    };

    assert_eq!(load_table("tests/fixtures/ridership.csv", &opts).unwrap().row_count(), 10);
    assert!(load_table("tests/fixtures/does_not_exist.csv", &opts).is_err());
}
