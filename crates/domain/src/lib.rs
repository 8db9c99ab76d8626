//! # Roster Domain
//!
//! Business domain types and models for the personnel roster service.
//!
//! This crate contains:
//! - Roster record and session data types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Rank vocabulary constants
//!
//! ## Architecture
//! - No dependencies on other roster crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
