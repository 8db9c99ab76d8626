//! # Roster API
//!
//! HTTP surface of the roster service.
//!
//! This crate contains:
//! - The application context (dependency wiring over domain/core/infra)
//! - The axum router and route handlers
//! - Domain error to HTTP response mapping
//!
//! ## Architecture
//! - Depends on all other crates
//! - Contains no business logic; handlers delegate to `roster-core` services

pub mod context;
pub mod error;
pub mod extract;
pub mod routes;

pub use context::AppContext;
pub use routes::build_router;
