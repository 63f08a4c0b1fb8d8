//! AddReservation command handler

use tracing::info;

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use crate::utils::validation::{
    MAX_ID_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_TABLE_NUMBER_LEN, validate_optional_text,
    validate_required_text, validate_text_len,
};
use shared::floor::{EventPayload, FloorEvent};
use shared::models::Reservation;

/// AddReservation action
#[derive(Debug, Clone)]
pub struct AddReservationAction {
    pub reservation: Reservation,
}

impl CommandHandler for AddReservationAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let r = &self.reservation;

        validate_required_text(&r.id, "id", MAX_ID_LEN)?;
        validate_required_text(&r.princess, "princess", MAX_NAME_LEN)?;
        // requested_table is free-form and may name a table not yet configured
        validate_text_len(&r.requested_table, "requested_table", MAX_TABLE_NUMBER_LEN)?;
        validate_optional_text(&r.help, "help", MAX_NOTE_LEN)?;
        validate_optional_text(&r.note, "note", MAX_NOTE_LEN)?;

        if ctx.id_in_use(&r.id) {
            return Err(FloorError::DuplicateReservation(r.id.clone()));
        }

        let seq = ctx.next_sequence();
        info!(
            reservation_id = %r.id,
            requested_table = %r.requested_table,
            budget = r.budget,
            seq,
            "Reservation added"
        );

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::ReservationAdded {
                reservation: r.clone(),
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::test_support::{metadata, occupied, reservation};
    use shared::floor::{FloorEventType, FloorSnapshot};
    use shared::models::Role;

    #[test]
    fn test_add_reservation_emits_event() {
        let snapshot = FloorSnapshot::new();
        let mut ctx = CommandContext::new(&snapshot);
        let action = AddReservationAction {
            reservation: reservation("r1", "Airi", "T1", 5000),
        };

        let events = action.execute(&mut ctx, &metadata(Role::Cast)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sequence, 1);
        assert_eq!(events[0].event_type, FloorEventType::ReservationAdded);
    }

    #[test]
    fn test_add_reservation_rejects_duplicate_id() {
        let mut snapshot = FloorSnapshot::new();
        snapshot.reservations.push(reservation("r1", "Airi", "T1", 5000));
        let mut ctx = CommandContext::new(&snapshot);
        let action = AddReservationAction {
            reservation: reservation("r1", "Rena", "T2", 3000),
        };

        let err = action.execute(&mut ctx, &metadata(Role::Owner)).unwrap_err();
        assert_eq!(err, FloorError::DuplicateReservation("r1".to_string()));
    }

    #[test]
    fn test_add_reservation_rejects_seated_id() {
        let mut snapshot = FloorSnapshot::new();
        snapshot.tables.push(occupied("r1", "T1", "Airi"));
        let mut ctx = CommandContext::new(&snapshot);
        let action = AddReservationAction {
            reservation: reservation("r1", "Airi", "T2", 5000),
        };

        let err = action.execute(&mut ctx, &metadata(Role::Owner)).unwrap_err();
        assert_eq!(err, FloorError::DuplicateReservation("r1".to_string()));
    }

    #[test]
    fn test_add_reservation_accepts_unknown_requested_table() {
        let snapshot = FloorSnapshot::new();
        let mut ctx = CommandContext::new(&snapshot);
        let action = AddReservationAction {
            reservation: reservation("r1", "Airi", "VIP-9", 0),
        };
        assert!(action.execute(&mut ctx, &metadata(Role::Owner)).is_ok());
    }

    #[test]
    fn test_add_reservation_requires_id_and_name() {
        let snapshot = FloorSnapshot::new();
        let mut ctx = CommandContext::new(&snapshot);

        let no_id = AddReservationAction {
            reservation: reservation("", "Airi", "T1", 0),
        };
        assert!(matches!(
            no_id.execute(&mut ctx, &metadata(Role::Owner)),
            Err(FloorError::InvalidInput(_))
        ));

        let no_name = AddReservationAction {
            reservation: reservation("r2", "  ", "T1", 0),
        };
        assert!(matches!(
            no_name.execute(&mut ctx, &metadata(Role::Owner)),
            Err(FloorError::InvalidInput(_))
        ));
    }
}
