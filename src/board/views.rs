//! Nested read views over the flat entity store
//!
//! Views are assembled at read time: projects sorted by their order, each
//! carrying its milestones sorted by milestone order, each carrying its
//! tasks sorted by task order. Every level sorts independently. Pure reads,
//! no side effects.

use serde::Serialize;

use super::board_data::BoardData;
use super::entity::{Milestone, Project, Task};
use super::error::{BoardError, BoardResult, EntityKind};
use super::ordering::sort_by_position;

/// A project with its ordered milestones
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub milestones: Vec<MilestoneView>,
}

/// A milestone with its ordered tasks
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneView {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub tasks: Vec<Task>,
}

impl BoardData {
    /// The full nested board: all projects in board order, milestones and
    /// tasks nested under them. O(total entities) scan-and-filter per call.
    pub fn board_view(&self) -> Vec<ProjectView> {
        let mut projects: Vec<&Project> = self.projects.iter().collect();
        sort_by_position(&mut projects);
        projects
            .into_iter()
            .map(|p| self.assemble_project(p))
            .collect()
    }

    /// Nested view of a single project
    pub fn project_view(&self, id: &str) -> BoardResult<ProjectView> {
        let project = self
            .find_project(id)
            .ok_or_else(|| BoardError::not_found(EntityKind::Project, id))?;
        Ok(self.assemble_project(project))
    }

    /// The milestones of `project_id` in read order
    pub fn milestones_of(&self, project_id: &str) -> Vec<&Milestone> {
        let mut milestones: Vec<&Milestone> = self
            .milestones
            .iter()
            .filter(|m| m.project_id == project_id)
            .collect();
        sort_by_position(&mut milestones);
        milestones
    }

    /// The tasks of `milestone_id` in read order
    pub fn tasks_of(&self, milestone_id: &str) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.milestone_id == milestone_id)
            .collect();
        sort_by_position(&mut tasks);
        tasks
    }

    fn assemble_project(&self, project: &Project) -> ProjectView {
        let milestones = self
            .milestones_of(&project.id)
            .into_iter()
            .map(|m| MilestoneView {
                milestone: m.clone(),
                tasks: self.tasks_of(&m.id).into_iter().cloned().collect(),
            })
            .collect();
        ProjectView {
            project: project.clone(),
            milestones,
        }
    }
}
