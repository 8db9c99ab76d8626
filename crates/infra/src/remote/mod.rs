//! Remote document store client

pub mod client;

pub use client::HttpRemoteStore;
