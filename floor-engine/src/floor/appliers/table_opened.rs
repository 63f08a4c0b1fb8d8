//! TableOpened event applier

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

/// TableOpened applier
pub struct TableOpenedApplier;

impl EventApplier for TableOpenedApplier {
    fn apply(&self, snapshot: &mut FloorSnapshot, event: &FloorEvent) {
        if let EventPayload::TableOpened { table } = &event.payload {
            snapshot.tables.push(table.clone());
            snapshot.last_sequence = event.sequence;
            snapshot.update_checksum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::test_support::{event, occupied};

    #[test]
    fn test_table_opened_applier() {
        let mut snapshot = FloorSnapshot::new();
        let e = event(
            7,
            EventPayload::TableOpened {
                table: occupied("w1", "T4", "Yuna"),
            },
        );
        TableOpenedApplier.apply(&mut snapshot, &e);

        assert_eq!(snapshot.tables.len(), 1);
        assert_eq!(snapshot.tables[0].table_number, "T4");
        assert_eq!(snapshot.last_sequence, 7);
    }
}
