//! ReservationDeleted event applier

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// ReservationDeleted applier
pub struct ReservationDeletedApplier;

impl EventApplier for ReservationDeletedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::ReservationDeleted { reservation_id } = &event.payload {
            // Removes every entry with the id
            snapshot.reservations.retain(|r| &r.id != reservation_id);
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}
