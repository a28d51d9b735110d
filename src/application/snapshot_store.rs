use derive_more::Display;

use crate::domain::errors::{TransportError, TransportResult};
use crate::domain::gallery::{DateViewRecord, RawSnapshot, SymbolSelector, ViewModelBuilder};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error, log_info};

/// Fetch lifecycle. Every state may go back to `Loading` on a new selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LoadState {
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "loading")]
    Loading,
    #[display(fmt = "ready")]
    Ready,
    #[display(fmt = "errored")]
    Errored,
}

/// A fetch the transport must perform. The selector doubles as the
/// supersession token: a completion only lands while its selector is still
/// the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub selector: SymbolSelector,
    pub request_id: u64,
}

/// What the rendering layer sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineView {
    Idle,
    Loading,
    Errored,
    Ready(Vec<DateViewRecord>),
}

impl TimelineView {
    pub fn records(&self) -> &[DateViewRecord] {
        match self {
            Self::Ready(records) => records,
            _ => &[],
        }
    }
}

/// Owns the active selector and the latest snapshot. All mutation goes
/// through [`SnapshotStore::select_symbol`] and
/// [`SnapshotStore::on_fetch_complete`].
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    selector: SymbolSelector,
    snapshot: RawSnapshot,
    state: LoadState,
    last_error: Option<TransportError>,
    requests_issued: u64,
}

impl SnapshotStore {
    /// A store that has not requested anything yet.
    pub fn new(selector: SymbolSelector) -> Self {
        Self {
            selector,
            snapshot: RawSnapshot::empty(selector),
            state: LoadState::Idle,
            last_error: None,
            requests_issued: 0,
        }
    }

    /// Startup: already loading the default selector.
    pub fn start(default_selector: SymbolSelector) -> (Self, FetchTicket) {
        let mut store = Self::new(default_selector);
        let ticket = store.select_symbol(default_selector);
        (store, ticket)
    }

    /// Switches to `selector`, drops the current snapshot and returns the
    /// fetch to issue. Selecting the active selector again re-fetches.
    pub fn select_symbol(&mut self, selector: SymbolSelector) -> FetchTicket {
        let previous = self.state;
        self.selector = selector;
        self.snapshot = RawSnapshot::empty(selector);
        self.last_error = None;
        self.state = LoadState::Loading;
        self.requests_issued += 1;

        log_info!(
            LogComponent::Application("SnapshotStore"),
            "{} -> loading for '{}' (request #{})",
            previous,
            selector,
            self.requests_issued
        );

        FetchTicket { selector, request_id: self.requests_issued }
    }

    /// Applies a finished fetch. Returns `false` when the result belongs to a
    /// selector that has since been replaced and was discarded.
    pub fn on_fetch_complete(
        &mut self,
        selector: SymbolSelector,
        result: TransportResult<RawSnapshot>,
    ) -> bool {
        if selector != self.selector {
            log_debug!(
                LogComponent::Application("SnapshotStore"),
                "Dropping stale response for '{}' (active: '{}')",
                selector,
                self.selector
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                log_info!(
                    LogComponent::Application("SnapshotStore"),
                    "Snapshot for '{}' ready with {} dates",
                    selector,
                    snapshot.len()
                );
                self.snapshot = snapshot;
                self.last_error = None;
                self.state = LoadState::Ready;
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("SnapshotStore"),
                    "Fetch for '{}' failed: {}",
                    selector,
                    error
                );
                self.snapshot = RawSnapshot::empty(selector);
                self.last_error = Some(error);
                self.state = LoadState::Errored;
            }
        }
        true
    }

    pub fn selector(&self) -> SymbolSelector {
        self.selector
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn snapshot(&self) -> &RawSnapshot {
        &self.snapshot
    }

    pub fn last_error(&self) -> Option<&TransportError> {
        self.last_error.as_ref()
    }

    /// Current state for rendering; records are rebuilt on every call.
    pub fn view(&self, builder: &ViewModelBuilder) -> TimelineView {
        match self.state {
            LoadState::Idle => TimelineView::Idle,
            LoadState::Loading => TimelineView::Loading,
            LoadState::Errored => TimelineView::Errored,
            LoadState::Ready => TimelineView::Ready(builder.build(&self.snapshot, self.selector)),
        }
    }
}
