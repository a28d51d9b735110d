use futures::future::LocalBoxFuture;

use crate::domain::errors::TransportResult;
use crate::domain::gallery::{RawSnapshot, SymbolSelector};

/// Source of chart snapshots (the backend behind `GET /charts/<selector>`).
///
/// The returned future owns everything it needs so it can outlive the call
/// and be driven from the UI event loop.
pub trait ChartSnapshotRepository {
    fn fetch_snapshot(&self, selector: SymbolSelector)
    -> LocalBoxFuture<'static, TransportResult<RawSnapshot>>;
}
