use chart_timeline_wasm::application::{LoadState, SnapshotStore, TimelineView};
use chart_timeline_wasm::domain::errors::TransportError;
use chart_timeline_wasm::domain::gallery::{RawSnapshot, SymbolSelector, ViewModelBuilder};
use serde_json::json;

fn snapshot_for(selector: SymbolSelector, body: serde_json::Value) -> RawSnapshot {
    RawSnapshot::from_json(selector, body).unwrap()
}

#[test]
fn transport_failure_then_reselect_recovers() {
    let builder = ViewModelBuilder::new();
    let (mut store, ticket) = SnapshotStore::start(SymbolSelector::Nifty);
    assert_eq!(store.view(&builder), TimelineView::Loading);

    assert!(store.on_fetch_complete(
        ticket.selector,
        Err(TransportError::Status { status: 502, status_text: "Bad Gateway".into() }),
    ));
    assert_eq!(store.state(), LoadState::Errored);
    assert_eq!(store.view(&builder), TimelineView::Errored);
    assert!(store.view(&builder).records().is_empty());

    let retry = store.select_symbol(SymbolSelector::Nifty);
    assert_eq!(store.view(&builder), TimelineView::Loading);
    assert!(store.last_error().is_none());

    let body = json!({"2024-01-01": {"overview": "/uploads/overview/2024-01-01.png"}});
    assert!(store.on_fetch_complete(retry.selector, Ok(snapshot_for(SymbolSelector::Nifty, body))));
    assert_eq!(store.state(), LoadState::Ready);
    assert_eq!(store.view(&builder).records().len(), 1);
}

#[test]
fn late_response_for_replaced_selector_is_discarded() {
    let builder = ViewModelBuilder::new();
    let (mut store, first) = SnapshotStore::start(SymbolSelector::Nifty);
    let second = store.select_symbol(SymbolSelector::All);

    let all_body = json!({"2024-01-01": {"nifty": {}, "sensex": {}}});
    assert!(store.on_fetch_complete(
        second.selector,
        Ok(snapshot_for(SymbolSelector::All, all_body))
    ));

    let nifty_body = json!({"2024-02-01": {"tags": ["stale"]}});
    assert!(!store.on_fetch_complete(
        first.selector,
        Ok(snapshot_for(SymbolSelector::Nifty, nifty_body))
    ));

    assert_eq!(store.selector(), SymbolSelector::All);
    let view = store.view(&builder);
    assert_eq!(view.records().len(), 1);
    assert_eq!(view.records()[0].symbols().len(), 2);
}

#[test]
fn late_failure_for_replaced_selector_does_not_error_the_store() {
    let (mut store, first) = SnapshotStore::start(SymbolSelector::Sensex);
    let _second = store.select_symbol(SymbolSelector::BankNifty);

    assert!(!store.on_fetch_complete(first.selector, Err(TransportError::Timeout(30_000))));
    assert_eq!(store.state(), LoadState::Loading);
    assert!(store.last_error().is_none());
}

#[test]
fn success_replaces_snapshot_wholesale() {
    let (mut store, ticket) = SnapshotStore::start(SymbolSelector::Nifty);
    store.on_fetch_complete(
        ticket.selector,
        Ok(snapshot_for(SymbolSelector::Nifty, json!({"2024-01-01": {}, "2024-01-02": {}}))),
    );
    let again = store.select_symbol(SymbolSelector::Nifty);
    store.on_fetch_complete(
        again.selector,
        Ok(snapshot_for(SymbolSelector::Nifty, json!({"2024-03-03": {}}))),
    );

    let dates: Vec<&str> = store.snapshot().entries().keys().map(String::as_str).collect();
    assert_eq!(dates, ["2024-03-03"]);
}

#[test]
fn records_are_rebuilt_identically_on_each_view() {
    let builder = ViewModelBuilder::new();
    let (mut store, ticket) = SnapshotStore::start(SymbolSelector::All);
    store.on_fetch_complete(
        ticket.selector,
        Ok(snapshot_for(
            SymbolSelector::All,
            json!({"2024-01-01": {"sensex": {"tags": ["a"]}}, "bad-date": {"nifty": {}}}),
        )),
    );
    assert_eq!(store.view(&builder), store.view(&builder));
}
