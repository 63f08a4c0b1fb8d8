//! AssignTable command handler
//!
//! Converts a reservation into an occupied table. The produced
//! `TableAssigned` event removes the reservation and seats the guest in the
//! same step, so the two never coexist.

use tracing::info;

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use crate::utils::validation::{normalize_table_number, validate_start_time};
use shared::floor::{EventPayload, FloorEvent};
use shared::models::OccupiedTable;

/// AssignTable action
#[derive(Debug, Clone)]
pub struct AssignTableAction {
    pub reservation_id: String,
    pub table_number: String,
    pub time: String,
}

impl CommandHandler for AssignTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table_number = normalize_table_number(&self.table_number)?;
        validate_start_time(&self.time)?;

        let reservation = ctx
            .find_reservation(&self.reservation_id)
            .ok_or_else(|| FloorError::ReservationNotFound(self.reservation_id.clone()))?;

        if ctx.find_table(&reservation.id).is_some() {
            return Err(FloorError::DuplicateReservation(reservation.id.clone()));
        }
        ctx.ensure_table_free(&table_number)?;

        if !ctx.has_table_setting(&table_number) {
            tracing::debug!(
                table_number = %table_number,
                "Assigning to a table without a table setting"
            );
        }

        let seq = ctx.next_sequence();
        info!(
            reservation_id = %reservation.id,
            requested_table = %reservation.requested_table,
            table_number = %table_number,
            time = %self.time,
            seq,
            "Reservation assigned to table"
        );

        // 预约 id 沿用为桌台 id，便于追溯
        let table = OccupiedTable {
            id: reservation.id.clone(),
            table_number,
            princess: reservation.princess.clone(),
            budget: reservation.budget,
            time: self.time.clone(),
        };

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::TableAssigned {
                reservation_id: reservation.id.clone(),
                table,
            },
        )])
    }
}
