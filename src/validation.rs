//! Validation helper functions for the board MCP server
//!
//! This module contains parsing and validation logic shared by the tool
//! handlers: status and date parsing, and error-message builders that list
//! the available parent entities.

use crate::board::{BoardData, Status};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Parse and validate a status parameter
pub fn parse_status(status_str: &str) -> McpResult<Status> {
    status_str.parse::<Status>().map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid status '{}'. Valid statuses: Not Started, In Progress, Deferred, Blocked, Complete",
                status_str
            ),
            true,
        )
    })
}

/// Parse and validate a due-date parameter (calendar date, no time)
pub fn parse_due_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ),
            true,
        )
    })
}

/// Interpret an optional clearable date parameter: absent leaves the field
/// untouched, empty string clears it, otherwise it must parse
pub fn parse_due_date_patch(date_str: Option<String>) -> McpResult<Option<Option<NaiveDate>>> {
    match date_str {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(Some(None)),
        Some(s) => Ok(Some(Some(parse_due_date(&s)?))),
    }
}

/// Interpret an optional clearable text parameter, same rules as dates
pub fn parse_text_patch(text: Option<String>) -> Option<Option<String>> {
    match text {
        None => None,
        Some(s) if s.is_empty() => Some(None),
        Some(s) => Some(Some(s)),
    }
}

/// Format an error message for an invalid project reference, listing the
/// projects that do exist
pub fn format_invalid_project_error(project_id: &str, data: &BoardData) -> String {
    let view = data.board_view();
    if view.is_empty() {
        format!(
            "Project '{}' does not exist. No projects have been created yet. Create one with create_project first.",
            project_id
        )
    } else {
        let ids: Vec<String> = view.iter().map(|p| p.project.id.clone()).collect();
        format!(
            "Project '{}' does not exist.\nAvailable projects: {}",
            project_id,
            ids.join(", ")
        )
    }
}

/// Format an error message for an invalid milestone reference, listing the
/// milestones that do exist
pub fn format_invalid_milestone_error(milestone_id: &str, data: &BoardData) -> String {
    let ids: Vec<String> = data
        .board_view()
        .iter()
        .flat_map(|p| p.milestones.iter().map(|m| m.milestone.id.clone()))
        .collect();
    if ids.is_empty() {
        format!(
            "Milestone '{}' does not exist. No milestones have been created yet. Create one with create_milestone first.",
            milestone_id
        )
    } else {
        format!(
            "Milestone '{}' does not exist.\nAvailable milestones: {}",
            milestone_id,
            ids.join(", ")
        )
    }
}
