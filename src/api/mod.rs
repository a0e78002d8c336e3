//! HTTP surface: one recommendation endpoint plus health and vocabulary
//! lookups, served by axum.

pub mod error;
pub mod router;
pub mod server;
pub mod types;
