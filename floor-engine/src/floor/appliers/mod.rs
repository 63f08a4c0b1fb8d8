//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use crate::floor::traits::EventApplier;
use shared::floor::{EventPayload, FloorEvent, FloorSnapshot};

mod reservation_added;
mod reservation_deleted;
mod table_assigned;
mod table_deleted;
mod table_opened;
mod table_setting_added;
mod table_setting_removed;

pub use reservation_added::ReservationAddedApplier;
pub use reservation_deleted::ReservationDeletedApplier;
pub use table_assigned::TableAssignedApplier;
pub use table_deleted::TableDeletedApplier;
pub use table_opened::TableOpenedApplier;
pub use table_setting_added::TableSettingAddedApplier;
pub use table_setting_removed::TableSettingRemovedApplier;

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    ReservationAdded(ReservationAddedApplier),
    ReservationDeleted(ReservationDeletedApplier),
    TableSettingAdded(TableSettingAddedApplier),
    TableSettingRemoved(TableSettingRemovedApplier),
    TableOpened(TableOpenedApplier),
    TableDeleted(TableDeletedApplier),
    TableAssigned(TableAssignedApplier),
}

/// Convert FloorEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&FloorEvent> for EventAction {
    fn from(event: &FloorEvent) -> Self {
        match &event.payload {
            EventPayload::ReservationAdded { .. } => {
                EventAction::ReservationAdded(ReservationAddedApplier)
            }
            EventPayload::ReservationDeleted { .. } => {
                EventAction::ReservationDeleted(ReservationDeletedApplier)
            }
            EventPayload::TableSettingAdded { .. } => {
                EventAction::TableSettingAdded(TableSettingAddedApplier)
            }
            EventPayload::TableSettingRemoved { .. } => {
                EventAction::TableSettingRemoved(TableSettingRemovedApplier)
            }
            EventPayload::TableOpened { .. } => EventAction::TableOpened(TableOpenedApplier),
            EventPayload::TableDeleted { .. } => EventAction::TableDeleted(TableDeletedApplier),
            EventPayload::TableAssigned { .. } => EventAction::TableAssigned(TableAssignedApplier),
        }
    }
}

/// Apply a sequence of events to a snapshot, in order
pub fn apply_events<'a>(
    snapshot: &mut FloorSnapshot,
    events: impl IntoIterator<Item = &'a FloorEvent>,
) {
    for event in events {
        EventAction::from(event).apply(snapshot, event);
    }
}
