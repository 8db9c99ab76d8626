//! Domain types and models

pub mod record;
pub mod session;

pub use record::{
    Occupation, RecordDraft, RecordStatus, RosterRecord, NON_TECHNICAL_RANKS, TECHNICAL_RANKS,
};
pub use session::{AccountSummary, Credential, Session};
