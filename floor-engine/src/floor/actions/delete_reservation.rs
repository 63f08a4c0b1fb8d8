//! DeleteReservation command handler
//!
//! Deleting an id that is not present is a no-op, not an error.

use tracing::{debug, info};

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{EventPayload, FloorEvent};

/// DeleteReservation action
#[derive(Debug, Clone)]
pub struct DeleteReservationAction {
    pub reservation_id: String,
}

impl CommandHandler for DeleteReservationAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        if ctx.find_reservation(&self.reservation_id).is_none() {
            debug!(
                reservation_id = %self.reservation_id,
                "Reservation not present, nothing to delete"
            );
            return Ok(vec![]);
        }

        let seq = ctx.next_sequence();
        info!(reservation_id = %self.reservation_id, seq, "Reservation deleted");

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::ReservationDeleted {
                reservation_id: self.reservation_id.clone(),
            },
        )])
    }
}
