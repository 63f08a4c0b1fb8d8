//! AddTableSetting command handler
//!
//! Table settings behave as a set: adding a number that already exists is a
//! silent no-op.

use tracing::{debug, info};

use crate::floor::traits::{CommandContext, CommandHandler, CommandMetadata, FloorError};
use crate::utils::validation::normalize_table_number;
use shared::floor::{EventPayload, FloorEvent};

/// AddTableSetting action
#[derive(Debug, Clone)]
pub struct AddTableSettingAction {
    pub table_number: String,
}

impl CommandHandler for AddTableSettingAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<FloorEvent>, FloorError> {
        let table_number = normalize_table_number(&self.table_number)?;

        if ctx.has_table_setting(&table_number) {
            debug!(table_number = %table_number, "Table setting already exists");
            return Ok(vec![]);
        }

        let seq = ctx.next_sequence();
        info!(table_number = %table_number, seq, "Table setting added");

        Ok(vec![FloorEvent::new(
            seq,
            metadata.operator_email.clone(),
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            EventPayload::TableSettingAdded { table_number },
        )])
    }
}
