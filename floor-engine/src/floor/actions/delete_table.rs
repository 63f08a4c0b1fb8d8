//! DeleteTable command handler
//!
//! Clears an occupied table when the guest leaves. Absent ids are a no-op.

use tracing::{debug, info};

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{EventPayload, FloorEvent};

/// DeleteTable action
#[derive(Debug, Clone)]
pub struct DeleteTableAction {
    pub table_id: String,
}

impl CommandHandler for DeleteTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let Some(table) = ctx.find_table(&self.table_id) else {
            debug!(table_id = %self.table_id, "Occupied table not present, nothing to delete");
            return Ok(vec![]);
        };

        let seq = ctx.next_sequence();
        info!(
            table_id = %self.table_id,
            table_number = %table.table_number,
            seq,
            "Occupied table deleted"
        );

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::TableDeleted {
                table_id: self.table_id.clone(),
            },
        )])
    }
}
