//! Create handlers for the board MCP server

use crate::BoardServerHandler;
use crate::board::{BoardError, Status};
use crate::validation;
use chrono::NaiveDate;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::debug;

impl BoardServerHandler {
    /// **Create project**: New top-level project, appended to the end of
    /// the board unless an explicit order is given.
    pub async fn handle_create_project(
        &self,
        name: String,
        details: Option<String>,
        due_date: Option<String>,
        order: Option<u32>,
    ) -> McpResult<String> {
        let due_date = parse_optional_date(due_date)?;

        let mut data = self.data.lock().unwrap();
        let project = match data.create_project(name, details, due_date, order) {
            Ok(p) => p,
            Err(e) => {
                drop(data);
                bail_public!(_, "{}", e);
            }
        };
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        debug!(id = %project.id, "created project");
        Ok(format!(
            "Project created with ID: {} (order: {})",
            project.id, project.order
        ))
    }

    /// **Create milestone**: New milestone under a project. Status defaults
    /// to "Not Started". An explicit order is taken as-is; siblings are not
    /// shifted (reorder_milestones restores density).
    pub async fn handle_create_milestone(
        &self,
        project_id: String,
        name: String,
        details: Option<String>,
        status: Option<String>,
        due_date: Option<String>,
        order: Option<u32>,
    ) -> McpResult<String> {
        let status = parse_optional_status(status)?;
        let due_date = parse_optional_date(due_date)?;

        let mut data = self.data.lock().unwrap();
        let milestone =
            match data.create_milestone(&project_id, name, details, status, due_date, order) {
                Ok(m) => m,
                Err(BoardError::InvalidReference { .. }) => {
                    let msg = validation::format_invalid_project_error(&project_id, &data);
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

        debug!(id = %milestone.id, project = %project_id, "created milestone");
        Ok(format!(
            "Milestone created with ID: {} (order: {})",
            milestone.id, milestone.order
        ))
    }

    /// **Create task**: New task under a milestone. `completed` defaults to
    /// false and is independent of `status`.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_create_task(
        &self,
        milestone_id: String,
        name: String,
        details: Option<String>,
        status: Option<String>,
        completed: Option<bool>,
        due_date: Option<String>,
        order: Option<u32>,
    ) -> McpResult<String> {
        let status = parse_optional_status(status)?;
        let due_date = parse_optional_date(due_date)?;

        let mut data = self.data.lock().unwrap();
        let task = match data.create_task(
            &milestone_id,
            name,
            details,
            status,
            completed,
            due_date,
            order,
        ) {
            Ok(t) => t,
            Err(BoardError::InvalidReference { .. }) => {
                let msg = validation::format_invalid_milestone_error(&milestone_id, &data);
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

        debug!(id = %task.id, milestone = %milestone_id, "created task");
        Ok(format!(
            "Task created with ID: {} (order: {})",
            task.id, task.order
        ))
    }
}

fn parse_optional_status(status: Option<String>) -> McpResult<Option<Status>> {
    status.map(|s| validation::parse_status(&s)).transpose()
}

fn parse_optional_date(date: Option<String>) -> McpResult<Option<NaiveDate>> {
    date.map(|d| validation::parse_due_date(&d)).transpose()
}
