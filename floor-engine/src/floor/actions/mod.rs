//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use enum_dispatch::enum_dispatch;

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{FloorCommandPayload, FloorEvent};

mod add_reservation;
mod add_table_setting;
mod assign_table;
mod delete_reservation;
mod delete_table;
mod open_table;
mod remove_table_setting;

pub use add_reservation::AddReservationAction;
pub use add_table_setting::AddTableSettingAction;
pub use assign_table::AssignTableAction;
pub use delete_reservation::DeleteReservationAction;
pub use delete_table::DeleteTableAction;
pub use open_table::OpenTableAction;
pub use remove_table_setting::RemoveTableSettingAction;

/// CommandAction enum - dispatches to concrete action implementations
#[enum_dispatch(CommandHandler)]
pub enum CommandAction {
    AddReservation(AddReservationAction),
    DeleteReservation(DeleteReservationAction),
    AddTableSetting(AddTableSettingAction),
    RemoveTableSetting(RemoveTableSettingAction),
    OpenTable(OpenTableAction),
    DeleteTable(DeleteTableAction),
    AssignTable(AssignTableAction),
}

/// Convert a command payload to CommandAction
///
/// This is the ONLY place with a match on FloorCommandPayload.
impl From<&FloorCommandPayload> for CommandAction {
    fn from(payload: &FloorCommandPayload) -> Self {
        match payload {
            FloorCommandPayload::AddReservation { reservation } => {
                CommandAction::AddReservation(AddReservationAction {
                    reservation: reservation.clone(),
                })
            }
            FloorCommandPayload::DeleteReservation { reservation_id } => {
                CommandAction::DeleteReservation(DeleteReservationAction {
                    reservation_id: reservation_id.clone(),
                })
            }
            FloorCommandPayload::AddTableSetting { table_number } => {
                CommandAction::AddTableSetting(AddTableSettingAction {
                    table_number: table_number.clone(),
                })
            }
            FloorCommandPayload::RemoveTableSetting { table_number } => {
                CommandAction::RemoveTableSetting(RemoveTableSettingAction {
                    table_number: table_number.clone(),
                })
            }
            FloorCommandPayload::OpenTable {
                table_id,
                table_number,
                princess,
                budget,
                time,
            } => CommandAction::OpenTable(OpenTableAction {
                table_id: table_id.clone(),
                table_number: table_number.clone(),
                princess: princess.clone(),
                budget: *budget,
                time: time.clone(),
            }),
            FloorCommandPayload::DeleteTable { table_id } => {
                CommandAction::DeleteTable(DeleteTableAction {
                    table_id: table_id.clone(),
                })
            }
            FloorCommandPayload::AssignTable {
                reservation_id,
                table_number,
                time,
            } => CommandAction::AssignTable(AssignTableAction {
                reservation_id: reservation_id.clone(),
                table_number: table_number.clone(),
                time: time.clone(),
            }),
        }
    }
}
