use chart_timeline_wasm::domain::gallery::{RawSnapshot, SymbolSelector, ViewModelBuilder};
use chart_timeline_wasm::domain::logging::{LogEntry, LogLevel, Logger, init_logger};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

#[test]
fn skipped_dates_are_reported_as_warnings() {
    let logger = CapturingLogger::default();
    init_logger(Box::new(logger.clone()));

    let snapshot = RawSnapshot::from_json(
        SymbolSelector::All,
        json!({"1999-09-09": "flat", "1999-09-10": {"nifty": {}}}),
    )
    .unwrap();
    let records = ViewModelBuilder::new().build(&snapshot, SymbolSelector::All);
    assert_eq!(records.len(), 1);

    let entries = logger.entries.lock().unwrap();
    let warning = entries
        .iter()
        .find(|entry| entry.metadata.as_deref() == Some("1999-09-09"))
        .expect("mismatch was not logged");
    assert_eq!(warning.level, LogLevel::Warn);
    assert!(warning.message.contains("aggregate"));
    assert!(!entries.iter().any(|entry| entry.metadata.as_deref() == Some("1999-09-10")));
}
