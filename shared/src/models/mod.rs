//! Data models
//!
//! Shared between the reservation backend and dashboard clients (via API).
//! All IDs are `i64`. These are transient copies of records the backend
//! owns; no validation happens on the client side.

pub mod reservation;
pub mod table;

// Re-exports
pub use reservation::*;
pub use table::*;
