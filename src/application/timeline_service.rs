use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;

use crate::application::snapshot_store::{FetchTicket, LoadState, SnapshotStore, TimelineView};
use crate::domain::gallery::{ChartSnapshotRepository, SymbolSelector, ViewModelBuilder};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Application service wiring the store, the snapshot source and the
/// view-model builder together.
///
/// The store lives behind `Rc<RefCell<_>>`: each store operation borrows it
/// for its whole duration and no borrow is held across an `.await`, so
/// selections and completions never interleave.
pub struct TimelineService<R> {
    store: Rc<RefCell<SnapshotStore>>,
    repository: Rc<R>,
    builder: ViewModelBuilder,
}

impl<R> Clone for TimelineService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            repository: Rc::clone(&self.repository),
            builder: self.builder,
        }
    }
}

impl<R: ChartSnapshotRepository + 'static> TimelineService<R> {
    pub fn new(repository: R, initial_selector: SymbolSelector) -> Self {
        Self {
            store: Rc::new(RefCell::new(SnapshotStore::new(initial_selector))),
            repository: Rc::new(repository),
            builder: ViewModelBuilder::new(),
        }
    }

    /// Moves the store to `Loading` for `selector` and returns the fetch to run.
    pub fn begin(&self, selector: SymbolSelector) -> FetchTicket {
        self.store.borrow_mut().select_symbol(selector)
    }

    /// Runs the fetch for `ticket` and hands the result to the store.
    /// Resolves to `false` when a newer selection superseded the ticket.
    pub fn complete(&self, ticket: FetchTicket) -> LocalBoxFuture<'static, bool> {
        let fetch = self.repository.fetch_snapshot(ticket.selector);
        let store = Rc::clone(&self.store);
        async move {
            let result = fetch.await;
            log_debug!(
                LogComponent::Application("TimelineService"),
                "Request #{} for '{}' finished (ok: {})",
                ticket.request_id,
                ticket.selector,
                result.is_ok()
            );
            store.borrow_mut().on_fetch_complete(ticket.selector, result)
        }
        .boxed_local()
    }

    pub async fn select_symbol(&self, selector: SymbolSelector) -> bool {
        let ticket = self.begin(selector);
        self.complete(ticket).await
    }

    pub fn view(&self) -> TimelineView {
        self.store.borrow().view(&self.builder)
    }

    pub fn selector(&self) -> SymbolSelector {
        self.store.borrow().selector()
    }

    pub fn state(&self) -> LoadState {
        self.store.borrow().state()
    }
}
