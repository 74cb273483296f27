//! Client-related types shared between server and client
//!
//! Request payloads for endpoints that take more than a bare model.
//! These types are shared between the reservation backend and
//! tablebook-client.

use serde::{Deserialize, Serialize};

use crate::models::ReservationStatus;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

/// Seat assignment request (`PUT /tables/{table_id}/seat`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatTable {
    pub reservation_id: i64,
}

/// Status transition request (`PUT /reservations/{reservation_id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ReservationStatus,
}
