//! Shared types for the Tablebook reservation system
//!
//! Wire-level types used on both sides of the reservation API:
//! data models, request payloads, and the response envelope.

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::ApiResponse;
