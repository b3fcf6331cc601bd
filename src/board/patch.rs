//! Partial-update patches for board entities
//!
//! Each patch carries one `Option` per mutable field; only present fields
//! are applied, the rest of the record is left untouched. Clearable fields
//! (`details`, `due_date`) use a nested `Option`: `Some(None)` clears the
//! field, `Some(Some(v))` replaces it.

use chrono::NaiveDate;

use super::entity::{Milestone, Project, Status, Task};

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub details: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Default)]
pub struct MilestonePatch {
    pub name: Option<String>,
    pub details: Option<Option<String>>,
    pub status: Option<Status>,
    pub due_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub details: Option<Option<String>>,
    pub status: Option<Status>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<NaiveDate>>,
    /// Re-parents the task without touching sibling orders; prefer the
    /// move operation when a position in the new milestone matters
    pub milestone_id: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.details.is_none() && self.due_date.is_none()
    }

    pub fn apply(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(details) = self.details {
            project.details = details;
        }
        if let Some(due_date) = self.due_date {
            project.due_date = due_date;
        }
    }
}

impl MilestonePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.details.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }

    pub fn apply(self, milestone: &mut Milestone) {
        if let Some(name) = self.name {
            milestone.name = name;
        }
        if let Some(details) = self.details {
            milestone.details = details;
        }
        if let Some(status) = self.status {
            milestone.status = status;
        }
        if let Some(due_date) = self.due_date {
            milestone.due_date = due_date;
        }
    }
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.details.is_none()
            && self.status.is_none()
            && self.completed.is_none()
            && self.due_date.is_none()
            && self.milestone_id.is_none()
    }

    /// Applies everything except `milestone_id`, which the store validates
    /// and applies itself (it must check the referenced milestone exists).
    pub fn apply_fields(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(details) = self.details {
            task.details = details;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
    }
}
