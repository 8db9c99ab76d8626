//! Session auth gate

pub mod ports;
pub mod service;

pub use service::{LoginOutcome, SessionService};
