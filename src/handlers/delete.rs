//! Delete handlers for the board MCP server
//!
//! Project and milestone deletes cascade: descendants are removed with the
//! parent, and the surviving sibling group is renumbered to dense 0..n-1.
//! The whole cascade runs under one lock guard, so a half-deleted subtree
//! is never observable.

use crate::BoardServerHandler;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::debug;

impl BoardServerHandler {
    /// Deletes a project with all its milestones and their tasks.
    pub async fn handle_delete_project(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.delete_project(&id) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        debug!(id = %id, "deleted project cascade");
        Ok(format!("Project {} deleted", id))
    }

    /// Deletes a milestone with all its tasks.
    pub async fn handle_delete_milestone(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.delete_milestone(&id) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        debug!(id = %id, "deleted milestone cascade");
        Ok(format!("Milestone {} deleted", id))
    }

    /// Deletes a single task.
    pub async fn handle_delete_task(&self, id: String) -> McpResult<String> {
        let mut data = self.data.lock().unwrap();
        if let Err(e) = data.delete_task(&id) {
            drop(data);
            bail_public!(_, "{}", e);
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        debug!(id = %id, "deleted task");
        Ok(format!("Task {} deleted", id))
    }
}
