use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current timestamp in UTC
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Progress status shared by milestones and tasks
///
/// Wire representation matches the board UI labels ("Not Started",
/// "In Progress", ...), both in the TOML file and in tool parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Work has not begun
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Actively being worked on
    #[serde(rename = "In Progress")]
    InProgress,
    /// Intentionally postponed
    #[serde(rename = "Deferred")]
    Deferred,
    /// Cannot proceed until something external resolves
    #[serde(rename = "Blocked")]
    Blocked,
    /// Finished
    #[serde(rename = "Complete")]
    Complete,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Deferred => "Deferred",
            Status::Blocked => "Blocked",
            Status::Complete => "Complete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Status::NotStarted),
            "In Progress" => Ok(Status::InProgress),
            "Deferred" => Ok(Status::Deferred),
            "Blocked" => Ok(Status::Blocked),
            "Complete" => Ok(Status::Complete),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: Not Started, In Progress, Deferred, Blocked, Complete",
                s
            )),
        }
    }
}

/// A top-level project on the board
///
/// Projects are siblings of each other; their `order` field positions them
/// on the board. Ordering is dense (0..n-1) and maintained by the ordering
/// engine in `ordering.rs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned opaque identifier (e.g., "id_1")
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional free-form notes in Markdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Optional due date (calendar date, no time component)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Position among sibling projects, zero-based
    pub order: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A milestone belonging to exactly one project for its lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    /// Owning project; never changes after creation
    pub project_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Position among the project's milestones, zero-based
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

/// A task belonging to a milestone
///
/// `milestone_id` is mutable: tasks move between milestones via the ordering
/// engine's move operation. `completed` and `status` are deliberately
/// independent fields; the upstream schema defines both without any
/// synchronization between them, and we preserve that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// Owning milestone; reassigned by move_task
    pub milestone_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Status,
    /// Checkbox completion flag, independent of `status`
    #[serde(default)]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Position among the milestone's tasks, zero-based
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_wire_names() {
        for status in [
            Status::NotStarted,
            Status::InProgress,
            Status::Deferred,
            Status::Blocked,
            Status::Complete,
        ] {
            let parsed: Status = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result = "Cancelled".parse::<Status>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Valid options"));
    }

    #[test]
    fn test_status_default_is_not_started() {
        assert_eq!(Status::default(), Status::NotStarted);
    }
}
