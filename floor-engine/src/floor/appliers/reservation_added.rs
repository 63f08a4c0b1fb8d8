//! ReservationAdded event applier

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// ReservationAdded applier
pub struct ReservationAddedApplier;

impl EventApplier for ReservationAddedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::ReservationAdded { reservation } = &event.payload {
            snapshot.reservations.push(reservation.clone());
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}
