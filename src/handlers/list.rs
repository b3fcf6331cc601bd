//! List and get handlers for the board MCP server

use crate::BoardServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl BoardServerHandler {
    /// Renders the full nested board: projects in board order, milestones
    /// and tasks nested under them.
    pub async fn handle_list_projects(&self) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        let view = data.board_view();
        drop(data);

        Ok(formatting::format_board(&view))
    }

    /// Renders a single project with its milestones and tasks.
    pub async fn handle_get_project(&self, id: String) -> McpResult<String> {
        let data = self.data.lock().unwrap();
        let view = match data.project_view(&id) {
            Ok(v) => v,
            Err(_) => {
                drop(data);
                bail_public!(
                    _,
                    "Project '{}' not found. Use list_projects() to see available projects.",
                    id
                );
            }
        };
        drop(data);

        Ok(formatting::format_project(&view))
    }
}
