//! TableSettingRemoved event applier

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// TableSettingRemoved applier
pub struct TableSettingRemovedApplier;

impl EventApplier for TableSettingRemovedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::TableSettingRemoved { table_number } = &event.payload {
            // shift_remove keeps the floor-plan order of the remaining tables
            snapshot.table_settings.shift_remove(table_number);
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}
