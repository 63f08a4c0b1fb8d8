//! TableAssigned event applier
//!
//! Consumes the reservation and seats the guest in one update.

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// TableAssigned applier
pub struct TableAssignedApplier;

impl EventApplier for TableAssignedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::TableAssigned {
            reservation_id,
            table,
        } = &event.payload
        {
            snapshot.reservations.retain(|r| &r.id != reservation_id);
            snapshot.tables.push(table.clone());
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}
