//! OpenTable command handler
//!
//! Seats a walk-in guest directly, without going through a reservation.

use tracing::info;

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use crate::utils::validation::{
    MAX_ID_LEN, MAX_NAME_LEN, normalize_table_number, validate_required_text,
    validate_start_time,
};
use shared::floor::{EventPayload, FloorEvent};
use shared::models::OccupiedTable;

/// OpenTable action
#[derive(Debug, Clone)]
pub struct OpenTableAction {
    pub table_id: String,
    pub table_number: String,
    pub princess: String,
    pub budget: u64,
    pub time: String,
}

impl CommandHandler for OpenTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        validate_required_text(&self.table_id, "table_id", MAX_ID_LEN)?;
        let table_number = normalize_table_number(&self.table_number)?;
        validate_required_text(&self.princess, "princess", MAX_NAME_LEN)?;
        validate_start_time(&self.time)?;

        if ctx.id_in_use(&self.table_id) {
            return Err(FloorError::InvalidInput(format!(
                "Table id already in use: {}",
                self.table_id
            )));
        }
        // 防止重复开台
        ctx.ensure_table_free(&table_number)?;

        let seq = ctx.next_sequence();
        info!(
            table_id = %self.table_id,
            table_number = %table_number,
            budget = self.budget,
            time = %self.time,
            seq,
            "Table opened"
        );

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::TableOpened {
                table: OccupiedTable {
                    id: self.table_id.clone(),
                    table_number,
                    princess: self.princess.clone(),
                    budget: self.budget,
                    time: self.time.clone(),
                },
            },
        )])
    }
}
