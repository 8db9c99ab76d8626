//! Database implementations

pub mod manager;
pub mod mirror_repository;

pub use manager::DbManager;
pub use mirror_repository::SqliteMirrorStore;
