//! RemoveTableSetting command handler

use tracing::{debug, info, warn};

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use shared::floor::{EventPayload, FloorEvent};

/// RemoveTableSetting action
#[derive(Debug, Clone)]
pub struct RemoveTableSettingAction {
    pub table_number: String,
}

impl CommandHandler for RemoveTableSettingAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table_number = self.table_number.trim();

        if !ctx.has_table_setting(table_number) {
            debug!(table_number = %table_number, "Table setting not present, nothing to remove");
            return Ok(vec![]);
        }

        // Settings are independent of seatings; a seated table stays seated
        if ctx.snapshot().is_table_occupied(table_number) {
            warn!(table_number = %table_number, "Removing setting of an occupied table");
        }

        let seq = ctx.next_sequence();
        info!(table_number = %table_number, seq, "Table setting removed");

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::TableSettingRemoved {
                table_number: table_number.to_string(),
            },
        )])
    }
}
