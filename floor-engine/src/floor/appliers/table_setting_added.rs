//! TableSettingAdded event applier

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// TableSettingAdded applier
pub struct TableSettingAddedApplier;

impl EventApplier for TableSettingAddedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::TableSettingAdded { table_number } = &event.payload {
            snapshot.table_settings.insert(table_number.clone());
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}
