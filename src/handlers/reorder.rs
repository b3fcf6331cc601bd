//! Reorder handlers for the board MCP server
//!
//! Each reorder takes the complete new ordering of one sibling group as a
//! sequence of ids and assigns order = index over it. Ids that do not
//! belong to the group are skipped and given no order.

use crate::BoardServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl BoardServerHandler {
    pub async fn handle_reorder_projects(&self, ordered_ids: Vec<String>) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        data.reorder_projects(&ordered_ids);
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Reordered {} project(s)", ordered_ids.len()))
    }

    pub async fn handle_reorder_milestones(
        &self,
        project_id: String,
        ordered_ids: Vec<String>,
    ) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.reorder_milestones(&project_id, &ordered_ids) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Reordered {} milestone(s) in project {}",
            ordered_ids.len(),
            project_id
        ))
    }

    pub async fn handle_reorder_tasks(
        &self,
        milestone_id: String,
        ordered_ids: Vec<String>,
    ) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.reorder_tasks(&milestone_id, &ordered_ids) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!(
            "Reordered {} task(s) in milestone {}",
            ordered_ids.len(),
            milestone_id
        ))
    }
}
