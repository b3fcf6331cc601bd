//! Update handlers for the board MCP server
//!
//! Partial updates: only supplied fields change. Empty string clears a
//! clearable field (details, due_date), matching the rest of the tools.

use crate::BoardServerHandler;
use crate::board::{BoardError, MilestonePatch, ProjectPatch, TaskPatch};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl BoardServerHandler {
    pub async fn handle_update_project(
        &self,
        id: String,
        name: Option<String>,
        details: Option<String>,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let patch = ProjectPatch {
            name,
            details: validation::parse_text_patch(details),
            due_date: validation::parse_due_date_patch(due_date)?,
        };

        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.update_project(&id, patch) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Project {} updated successfully", id))
    }

    pub async fn handle_update_milestone(
        &self,
        id: String,
        name: Option<String>,
        details: Option<String>,
        status: Option<String>,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let status = status.map(|s| validation::parse_status(&s)).transpose()?;
        let patch = MilestonePatch {
            name,
            details: validation::parse_text_patch(details),
            status,
            due_date: validation::parse_due_date_patch(due_date)?,
        };

        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.update_milestone(&id, patch) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Milestone {} updated successfully", id))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn handle_update_task(
        &self,
        id: String,
        name: Option<String>,
        details: Option<String>,
        status: Option<String>,
        completed: Option<bool>,
        due_date: Option<String>,
        milestone_id: Option<String>,
    ) -> McpResult<String> {
        let status = status.map(|s| validation::parse_status(&s)).transpose()?;
        let patch = TaskPatch {
            name,
            details: validation::parse_text_patch(details),
            status,
            completed,
            due_date: validation::parse_due_date_patch(due_date)?,
            milestone_id,
        };

        let mut data = self.data.lock().unwrap();
        match data.update_task(&id, patch) {
            Ok(_) => {}
            Err(BoardError::InvalidReference { id: parent, .. }) => {
                let msg = validation::format_invalid_milestone_error(&parent, &data);
                drop(data);
                bail_public!(_, "{}", msg);
            }
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Task {} updated successfully", id))
    }
}
