use chart_timeline_wasm::application::SnapshotStore;
use chart_timeline_wasm::domain::errors::TransportError;
use chart_timeline_wasm::domain::gallery::{RawSnapshot, SymbolSelector, ViewModelBuilder};
use chart_timeline_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, init_logger};
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
fn failures_reach_the_logger_at_their_level() {
    let logger = CapturingLogger::default();
    init_logger(Box::new(logger.clone()));

    let (mut store, ticket) = SnapshotStore::start(SymbolSelector::FinNifty);
    store.on_fetch_complete(ticket.selector, Err(TransportError::Timeout(30_000)));

    let aggregate = RawSnapshot::empty(SymbolSelector::All);
    assert!(ViewModelBuilder::new().build(&aggregate, SymbolSelector::Sensex).is_empty());

    let entries = logger.entries.lock().unwrap();
    let failure = entries
        .iter()
        .find(|entry| entry.level == LogLevel::Error)
        .expect("fetch failure was not logged");
    assert_eq!(failure.component, LogComponent::Application("SnapshotStore"));
    assert!(failure.message.contains("finnifty"));
    assert!(failure.message.contains("30000 ms"));

    let disagreement = entries
        .iter()
        .find(|entry| entry.component == LogComponent::Domain("ViewModel"))
        .expect("shape disagreement was not logged");
    assert_eq!(disagreement.level, LogLevel::Warn);
    assert!(disagreement.message.contains("sensex"));
}
