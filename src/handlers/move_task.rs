//! Move-task handler for the board MCP server

use crate::BoardServerHandler;
use crate::board::BoardError;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::debug;

impl BoardServerHandler {
    /// **Move task**: Re-parents a task into `new_milestone_id` at position
    /// `new_order`. The source milestone's remaining tasks are compacted and
    /// destination tasks at or past the position shift up by one, so both
    /// groups stay dense. `new_order` past the end appends.
    pub async fn handle_move_task(
        &self,
        task_id: String,
        new_milestone_id: String,
        new_order: u32,
    ) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        let task = match data.move_task(&task_id, &new_milestone_id, new_order) {
            Ok(t) => t,
            Err(BoardError::InvalidReference { .. }) => {
                let msg = validation::format_invalid_milestone_error(&new_milestone_id, &data);
                drop(data);
                bail_public!(_, "{}", msg);
            }
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        debug!(id = %task_id, milestone = %new_milestone_id, order = task.order, "moved task");
        Ok(format!(
            "Task {} moved to milestone {} at position {}",
            task_id, new_milestone_id, task.order
        ))
    }
}
