pub mod snapshot_store;
pub mod timeline_service;

pub use snapshot_store::*;
pub use timeline_service::*;
