//! TableDeleted event applier

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// TableDeleted applier
pub struct TableDeletedApplier;

impl EventApplier for TableDeletedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::TableDeleted { table_id } = &event.payload {
            snapshot.tables.retain(|t| &t.id != table_id);
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}
