use std::collections::HashMap;

use super::entity::{Milestone, Project, Task};
use super::error::{BoardError, BoardResult, EntityKind};
use super::patch::{MilestonePatch, ProjectPatch, TaskPatch};

/// The board's entity store: flat collections of projects, milestones and
/// tasks, plus the id index.
///
/// Vec is used as the primary storage for each entity level:
/// 1. Maintains insertion order for stable TOML serialization
/// 2. Produces predictable diffs of the data file
/// 3. Simple ownership model - each Vec owns its records directly
///
/// Sibling ordering is NOT the Vec position; it is the `order` field on each
/// record, maintained by the ordering engine (`ordering.rs`). Reads sort by
/// `order` with a `created_at`/`id` tie-break for determinism.
pub struct BoardData {
    pub(crate) projects: Vec<Project>,
    pub(crate) milestones: Vec<Milestone>,
    pub(crate) tasks: Vec<Task>,

    /// HashMap index for O(1) id existence checks
    ///
    /// Maps id -> entity kind. It carries no references to the records
    /// themselves; lookups that need the record scan the owning Vec. The
    /// index is kept in sync by every add/remove and is NOT serialized -
    /// it is rebuilt from the three Vecs during deserialization.
    pub(crate) id_index: HashMap<String, EntityKind>,

    /// Counter for generating store-assigned ids
    pub(crate) id_counter: u32,
}

impl Default for BoardData {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            milestones: Vec::new(),
            tasks: Vec::new(),
            id_index: HashMap::new(),
            id_counter: 0,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl BoardData {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique entity id
    pub fn generate_id(&mut self) -> String {
        self.id_counter += 1;
        format!("id_{}", self.id_counter)
    }

    /// Kind of the entity registered under `id`, if any
    pub fn kind_of(&self, id: &str) -> Option<EntityKind> {
        self.id_index.get(id).copied()
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub(crate) fn find_project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn find_milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub(crate) fn find_milestone_mut(&mut self, id: &str) -> Option<&mut Milestone> {
        self.milestones.iter_mut().find(|m| m.id == id)
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(crate) fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Add a project record, registering it in the id index
    pub(crate) fn add_project(&mut self, project: Project) {
        self.id_index.insert(project.id.clone(), EntityKind::Project);
        self.projects.push(project);
    }

    pub(crate) fn add_milestone(&mut self, milestone: Milestone) {
        self.id_index
            .insert(milestone.id.clone(), EntityKind::Milestone);
        self.milestones.push(milestone);
    }

    pub(crate) fn add_task(&mut self, task: Task) {
        self.id_index.insert(task.id.clone(), EntityKind::Task);
        self.tasks.push(task);
    }

    /// Number of milestones under `project_id`
    pub fn milestone_count(&self, project_id: &str) -> usize {
        self.milestones
            .iter()
            .filter(|m| m.project_id == project_id)
            .count()
    }

    /// Number of tasks under `milestone_id`
    pub fn task_count(&self, milestone_id: &str) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.milestone_id == milestone_id)
            .count()
    }

    /// Apply a partial update to a project
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> BoardResult<Project> {
        let project = self
            .find_project_mut(id)
            .ok_or_else(|| BoardError::not_found(EntityKind::Project, id))?;
        patch.apply(project);
        Ok(project.clone())
    }

    /// Apply a partial update to a milestone
    pub fn update_milestone(&mut self, id: &str, patch: MilestonePatch) -> BoardResult<Milestone> {
        let milestone = self
            .find_milestone_mut(id)
            .ok_or_else(|| BoardError::not_found(EntityKind::Milestone, id))?;
        patch.apply(milestone);
        Ok(milestone.clone())
    }

    /// Apply a partial update to a task
    ///
    /// A `milestone_id` in the patch re-parents the task after the new
    /// milestone is validated; sibling orders are left as they are (use
    /// `move_task` to re-parent at a specific position).
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> BoardResult<Task> {
        if self.find_task(id).is_none() {
            return Err(BoardError::not_found(EntityKind::Task, id));
        }
        if let Some(ref new_parent) = patch.milestone_id {
            if self.kind_of(new_parent) != Some(EntityKind::Milestone) {
                return Err(BoardError::invalid_reference(
                    EntityKind::Milestone,
                    new_parent.clone(),
                ));
            }
        }
        let new_parent = patch.milestone_id.clone();
        let task = self
            .find_task_mut(id)
            .ok_or_else(|| BoardError::not_found(EntityKind::Task, id))?;
        if let Some(milestone_id) = new_parent {
            task.milestone_id = milestone_id;
        }
        patch.apply_fields(task);
        Ok(task.clone())
    }

    /// Delete a project and, transitively, all its milestones and tasks
    ///
    /// The cascade removes descendants before the project record itself, so
    /// no milestone or task ever survives with a dangling parent reference.
    /// Surviving sibling projects are compacted back to dense 0..n-1.
    pub fn delete_project(&mut self, id: &str) -> BoardResult<()> {
        if self.kind_of(id) != Some(EntityKind::Project) {
            return Err(BoardError::not_found(EntityKind::Project, id));
        }

        let child_milestones: Vec<String> = self
            .milestones
            .iter()
            .filter(|m| m.project_id == id)
            .map(|m| m.id.clone())
            .collect();
        for milestone_id in &child_milestones {
            self.remove_milestone_subtree(milestone_id);
        }

        self.projects.retain(|p| p.id != id);
        self.id_index.remove(id);
        self.compact_projects();
        Ok(())
    }

    /// Delete a milestone and all its tasks
    pub fn delete_milestone(&mut self, id: &str) -> BoardResult<()> {
        let project_id = self
            .find_milestone(id)
            .map(|m| m.project_id.clone())
            .ok_or_else(|| BoardError::not_found(EntityKind::Milestone, id))?;

        self.remove_milestone_subtree(id);
        self.compact_milestones(&project_id);
        Ok(())
    }

    /// Delete a single task, compacting the surviving siblings
    pub fn delete_task(&mut self, id: &str) -> BoardResult<()> {
        let milestone_id = self
            .find_task(id)
            .map(|t| t.milestone_id.clone())
            .ok_or_else(|| BoardError::not_found(EntityKind::Task, id))?;

        self.tasks.retain(|t| t.id != id);
        self.id_index.remove(id);
        self.compact_tasks(&milestone_id);
        Ok(())
    }

    /// Remove a milestone and its tasks without touching sibling orders.
    /// Callers compact the parent's sibling group afterwards.
    fn remove_milestone_subtree(&mut self, milestone_id: &str) {
        let child_tasks: Vec<String> = self
            .tasks
            .iter()
            .filter(|t| t.milestone_id == milestone_id)
            .map(|t| t.id.clone())
            .collect();
        for task_id in &child_tasks {
            self.id_index.remove(task_id);
        }
        self.tasks.retain(|t| t.milestone_id != milestone_id);

        self.milestones.retain(|m| m.id != milestone_id);
        self.id_index.remove(milestone_id);
    }
}
