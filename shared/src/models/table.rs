//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i32,
    /// Occupying reservation when the table is seated
    pub reservation_id: Option<i64>,
}

impl Table {
    /// Whether a party is currently seated at this table
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub table_name: String,
    pub capacity: i32,
}
