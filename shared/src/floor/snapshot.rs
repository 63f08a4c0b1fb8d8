//! Floor snapshot - the state computed from the event stream
//!
//! The snapshot carries a `state_checksum` so a client replaying events can
//! detect drift.

use crate::models::{OccupiedTable, Reservation};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Floor snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloorSnapshot {
    /// Pending reservations, insertion order
    pub reservations: Vec<Reservation>,
    /// Configured table numbers, insertion order, no duplicates
    pub table_settings: IndexSet<String>,
    /// Occupied tables, insertion order
    pub tables: Vec<OccupiedTable>,
    /// Last applied event sequence
    pub last_sequence: u64,
    #[serde(default)]
    pub state_checksum: String,
}

impl FloorSnapshot {
    pub fn new() -> Self {
        let mut snapshot = Self::default();
        snapshot.update_checksum();
        snapshot
    }

    pub fn find_reservation(&self, reservation_id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == reservation_id)
    }

    pub fn find_table(&self, table_id: &str) -> Option<&OccupiedTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// The occupied table currently seated at `table_number`, if any
    pub fn table_at(&self, table_number: &str) -> Option<&OccupiedTable> {
        self.tables.iter().find(|t| t.table_number == table_number)
    }

    pub fn is_table_occupied(&self, table_number: &str) -> bool {
        self.table_at(table_number).is_some()
    }

    /// Compute state checksum for drift detection
    ///
    /// Covers collection sizes, every id and table number, and the last
    /// applied sequence. Returns a 16-character hex string.
    pub fn compute_checksum(&self) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher as _;

        let mut hasher = DefaultHasher::new();

        self.reservations.len().hash(&mut hasher);
        for r in &self.reservations {
            r.id.hash(&mut hasher);
        }

        self.table_settings.len().hash(&mut hasher);
        for t in &self.table_settings {
            t.hash(&mut hasher);
        }

        self.tables.len().hash(&mut hasher);
        for t in &self.tables {
            t.id.hash(&mut hasher);
            t.table_number.hash(&mut hasher);
        }

        self.last_sequence.hash(&mut hasher);

        format!("{:016x}", hasher.finish())
    }

    pub fn update_checksum(&mut self) {
        self.state_checksum = self.compute_checksum();
    }

    /// Returns false if drift is detected
    pub fn verify_checksum(&self) -> bool {
        self.state_checksum == self.compute_checksum()
    }
}
