//! Record synchronizer: remote-preferred persistence with a local mirror

pub mod migration;
pub mod ports;
pub mod service;

pub use service::{SavedRecord, StoreSource, SyncOutcome, SyncService};
