//! Occupied Table Model

use serde::{Deserialize, Serialize};

/// A seating in progress (卓が埋まっている状態)
///
/// When produced by assignment the id is the originating reservation's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedTable {
    pub id: String,
    pub table_number: String,
    /// Guest display name
    pub princess: String,
    pub budget: u64,
    /// Start time, `HH:MM`
    pub time: String,
}
