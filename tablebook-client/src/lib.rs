//! Tablebook Client - HTTP client for the reservation backend
//!
//! Provides network-based HTTP calls to the reservation backend API.

pub mod config;
pub mod error;
pub mod format;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::client::{SeatTable, StatusUpdate};
pub use shared::models::{Reservation, ReservationCreate, ReservationStatus, Table, TableCreate};

// Every operation takes one of these; re-exported so callers do not need
// a direct tokio-util dependency
pub use tokio_util::sync::CancellationToken;
