//! Formatting helper functions for the board MCP server
//!
//! This module renders the nested board view as indented text for tool
//! output: projects at the top level, milestones and tasks nested under
//! them, every level already in board order.

use crate::board::{MilestoneView, ProjectView, Task};

/// Format the full nested board into a display string
pub fn format_board(projects: &[ProjectView]) -> String {
    if projects.is_empty() {
        return "No projects found".to_string();
    }

    let mut result = format!("Found {} project(s):\n\n", projects.len());
    for view in projects {
        format_project_into(&mut result, view);
    }
    result
}

/// Format a single project view into a display string
pub fn format_project(view: &ProjectView) -> String {
    let mut result = String::new();
    format_project_into(&mut result, view);
    result
}

fn format_project_into(result: &mut String, view: &ProjectView) {
    let project = &view.project;
    result.push_str(&format!("- [{}] {} (order: {})\n", project.id, project.name, project.order));
    if let Some(ref details) = project.details {
        result.push_str(&format!("  Details: {}\n", details));
    }
    if let Some(ref date) = project.due_date {
        result.push_str(&format!("  Due: {}\n", date));
    }
    result.push_str(&format!("  Created: {}\n", project.created_at.to_rfc3339()));

    for milestone_view in &view.milestones {
        format_milestone_into(result, milestone_view);
    }
}

fn format_milestone_into(result: &mut String, view: &MilestoneView) {
    let milestone = &view.milestone;
    result.push_str(&format!(
        "  * [{}] {} (status: {}, order: {})\n",
        milestone.id, milestone.name, milestone.status, milestone.order
    ));
    if let Some(ref details) = milestone.details {
        result.push_str(&format!("    Details: {}\n", details));
    }
    if let Some(ref date) = milestone.due_date {
        result.push_str(&format!("    Due: {}\n", date));
    }

    for task in &view.tasks {
        format_task_into(result, task);
    }
}

fn format_task_into(result: &mut String, task: &Task) {
    let checkbox = if task.completed { "x" } else { " " };
    result.push_str(&format!(
        "    - [{}] [{}] {} (status: {}, order: {})\n",
        checkbox, task.id, task.name, task.status, task.order
    ));
    if let Some(ref details) = task.details {
        result.push_str(&format!("      Details: {}\n", details));
    }
    if let Some(ref date) = task.due_date {
        result.push_str(&format!("      Due: {}\n", date));
    }
}
