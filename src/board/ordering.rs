//! The ordering engine: keeps each sibling group's `order` values dense
//! (0..n-1, zero-based) under inserts, deletes, reorders and cross-milestone
//! moves.
//!
//! Orders are meaningful only relative to siblings under the same parent;
//! sibling groups in different parents are fully independent. Every
//! operation here touches at most two sibling groups and leaves the store
//! consistent before returning.

use chrono::{DateTime, NaiveDate, Utc};

use super::board_data::BoardData;
use super::entity::{Milestone, Project, Status, Task, now_utc};
use super::error::{BoardError, BoardResult, EntityKind};

/// Entities that occupy a slot in a sibling group.
///
/// The position key sorts by `order` first, breaking ties (possible only
/// after an explicit-order insert, see `create_*`) by creation time and
/// then id, so reads are deterministic even on a degenerate group.
pub(crate) trait Positioned {
    fn position(&self) -> (u32, DateTime<Utc>, &str);
    fn set_order(&mut self, order: u32);
}

impl Positioned for Project {
    fn position(&self) -> (u32, DateTime<Utc>, &str) {
        (self.order, self.created_at, &self.id)
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Positioned for Milestone {
    fn position(&self) -> (u32, DateTime<Utc>, &str) {
        (self.order, self.created_at, &self.id)
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Positioned for Task {
    fn position(&self) -> (u32, DateTime<Utc>, &str) {
        (self.order, self.created_at, &self.id)
    }
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Sort a sibling group into its deterministic read order
pub(crate) fn sort_by_position<T: Positioned>(siblings: &mut [&T]) {
    siblings.sort_by(|a, b| a.position().cmp(&b.position()));
}

/// Renumber a sibling group to dense 0..n-1, preserving its current
/// deterministic read order
fn compact<T: Positioned>(mut siblings: Vec<&mut T>) {
    siblings.sort_by(|a, b| a.position().cmp(&b.position()));
    for (index, sibling) in siblings.iter_mut().enumerate() {
        sibling.set_order(index as u32);
    }
}

impl BoardData {
    /// Create a project, appended to the end of the board unless an
    /// explicit order is supplied.
    ///
    /// An explicit order is taken as authoritative: existing siblings are
    /// not shifted to make room, so a duplicate order value can exist until
    /// the next reorder_projects call. Reads stay deterministic through the
    /// position tie-break.
    pub fn create_project(
        &mut self,
        name: String,
        details: Option<String>,
        due_date: Option<NaiveDate>,
        explicit_order: Option<u32>,
    ) -> BoardResult<Project> {
        require_name(&name)?;
        let order = explicit_order.unwrap_or(self.projects.len() as u32);
        let project = Project {
            id: self.generate_id(),
            name,
            details,
            due_date,
            order,
            created_at: now_utc(),
        };
        self.add_project(project.clone());
        Ok(project)
    }

    /// Create a milestone under `project_id`, appended unless an explicit
    /// order is supplied (same authoritative-order rule as projects).
    pub fn create_milestone(
        &mut self,
        project_id: &str,
        name: String,
        details: Option<String>,
        status: Option<Status>,
        due_date: Option<NaiveDate>,
        explicit_order: Option<u32>,
    ) -> BoardResult<Milestone> {
        require_name(&name)?;
        if self.kind_of(project_id) != Some(EntityKind::Project) {
            return Err(BoardError::invalid_reference(EntityKind::Project, project_id));
        }
        let order = explicit_order.unwrap_or(self.milestone_count(project_id) as u32);
        let milestone = Milestone {
            id: self.generate_id(),
            project_id: project_id.to_string(),
            name,
            details,
            status: status.unwrap_or_default(),
            due_date,
            order,
            created_at: now_utc(),
        };
        self.add_milestone(milestone.clone());
        Ok(milestone)
    }

    /// Create a task under `milestone_id`, appended unless an explicit
    /// order is supplied (same authoritative-order rule as projects).
    #[allow(clippy::too_many_arguments)]
    pub fn create_task(
        &mut self,
        milestone_id: &str,
        name: String,
        details: Option<String>,
        status: Option<Status>,
        completed: Option<bool>,
        due_date: Option<NaiveDate>,
        explicit_order: Option<u32>,
    ) -> BoardResult<Task> {
        require_name(&name)?;
        if self.kind_of(milestone_id) != Some(EntityKind::Milestone) {
            return Err(BoardError::invalid_reference(
                EntityKind::Milestone,
                milestone_id,
            ));
        }
        let order = explicit_order.unwrap_or(self.task_count(milestone_id) as u32);
        let task = Task {
            id: self.generate_id(),
            milestone_id: milestone_id.to_string(),
            name,
            details,
            status: status.unwrap_or_default(),
            completed: completed.unwrap_or(false),
            due_date,
            order,
            created_at: now_utc(),
        };
        self.add_task(task.clone());
        Ok(task)
    }

    /// Assign `order = index` over the supplied project id sequence.
    ///
    /// Ids that are not projects are skipped and given no order; projects
    /// missing from the list keep their old order value. When the list
    /// covers the full sibling set (the normal drag-and-drop payload) the
    /// group is exactly dense afterwards. Idempotent.
    pub fn reorder_projects(&mut self, ordered_ids: &[String]) {
        for (index, id) in ordered_ids.iter().enumerate() {
            if let Some(project) = self.find_project_mut(id) {
                project.order = index as u32;
            }
        }
    }

    /// Assign `order = index` over the supplied milestone id sequence,
    /// scoped to the milestones of `project_id`.
    ///
    /// Ids that are not milestones of that project are skipped and given
    /// no order. Idempotent.
    pub fn reorder_milestones(&mut self, project_id: &str, ordered_ids: &[String]) -> BoardResult<()> {
        if self.kind_of(project_id) != Some(EntityKind::Project) {
            return Err(BoardError::not_found(EntityKind::Project, project_id));
        }
        for (index, id) in ordered_ids.iter().enumerate() {
            if let Some(milestone) = self
                .milestones
                .iter_mut()
                .find(|m| m.id == *id && m.project_id == project_id)
            {
                milestone.order = index as u32;
            }
        }
        Ok(())
    }

    /// Assign `order = index` over the supplied task id sequence, scoped to
    /// the tasks of `milestone_id`. Same skip rule as milestones.
    pub fn reorder_tasks(&mut self, milestone_id: &str, ordered_ids: &[String]) -> BoardResult<()> {
        if self.kind_of(milestone_id) != Some(EntityKind::Milestone) {
            return Err(BoardError::not_found(EntityKind::Milestone, milestone_id));
        }
        for (index, id) in ordered_ids.iter().enumerate() {
            if let Some(task) = self
                .tasks
                .iter_mut()
                .find(|t| t.id == *id && t.milestone_id == milestone_id)
            {
                task.order = index as u32;
            }
        }
        Ok(())
    }

    /// Move a task to `new_milestone_id` at position `new_order`.
    ///
    /// Both touched sibling groups are left dense: the source milestone's
    /// remaining tasks are compacted, destination tasks at or past the
    /// insertion point are shifted up by one, and the destination group is
    /// compacted after the insert (this also repairs degenerate destination
    /// orders left behind by an explicit-order create). `new_order` is
    /// clamped to the destination's 0..=len range. Moving within one
    /// milestone repositions the task the same way.
    pub fn move_task(
        &mut self,
        task_id: &str,
        new_milestone_id: &str,
        new_order: u32,
    ) -> BoardResult<Task> {
        let old_milestone_id = self
            .find_task(task_id)
            .map(|t| t.milestone_id.clone())
            .ok_or_else(|| BoardError::not_found(EntityKind::Task, task_id))?;
        if self.kind_of(new_milestone_id) != Some(EntityKind::Milestone) {
            return Err(BoardError::invalid_reference(
                EntityKind::Milestone,
                new_milestone_id,
            ));
        }

        // Compact the source group without the moving task
        compact(
            self.tasks
                .iter_mut()
                .filter(|t| t.milestone_id == old_milestone_id && t.id != task_id)
                .collect(),
        );

        let dest_len = self
            .tasks
            .iter()
            .filter(|t| t.milestone_id == new_milestone_id && t.id != task_id)
            .count() as u32;
        let insert_at = new_order.min(dest_len);

        // Make room at the insertion point. Saturating: an explicit-order
        // create may have left a sibling at u32::MAX, and the compaction
        // below renumbers the group anyway.
        for task in self
            .tasks
            .iter_mut()
            .filter(|t| t.milestone_id == new_milestone_id && t.id != task_id)
        {
            if task.order >= insert_at {
                task.order = task.order.saturating_add(1);
            }
        }

        let task = self
            .find_task_mut(task_id)
            .ok_or_else(|| BoardError::not_found(EntityKind::Task, task_id))?;
        task.milestone_id = new_milestone_id.to_string();
        task.order = insert_at;

        self.compact_tasks(new_milestone_id);
        self.find_task(task_id)
            .cloned()
            .ok_or_else(|| BoardError::not_found(EntityKind::Task, task_id))
    }

    /// Renumber all projects to dense 0..n-1
    pub(crate) fn compact_projects(&mut self) {
        compact(self.projects.iter_mut().collect());
    }

    /// Renumber the milestones of `project_id` to dense 0..n-1
    pub(crate) fn compact_milestones(&mut self, project_id: &str) {
        compact(
            self.milestones
                .iter_mut()
                .filter(|m| m.project_id == project_id)
                .collect(),
        );
    }

    /// Renumber the tasks of `milestone_id` to dense 0..n-1
    pub(crate) fn compact_tasks(&mut self, milestone_id: &str) {
        compact(
            self.tasks
                .iter_mut()
                .filter(|t| t.milestone_id == milestone_id)
                .collect(),
        );
    }
}

fn require_name(name: &str) -> BoardResult<()> {
    if name.trim().is_empty() {
        return Err(BoardError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_milestone() -> (BoardData, String, String) {
        let mut data = BoardData::new();
        let project_id = data
            .create_project("Launch".to_string(), None, None, None)
            .unwrap()
            .id;
        let milestone_id = data
            .create_milestone(&project_id, "Alpha".to_string(), None, None, None, None)
            .unwrap()
            .id;
        (data, project_id, milestone_id)
    }

    fn task_orders(data: &BoardData, milestone_id: &str) -> Vec<(String, u32)> {
        let mut tasks: Vec<&Task> = data
            .tasks
            .iter()
            .filter(|t| t.milestone_id == milestone_id)
            .collect();
        sort_by_position(&mut tasks);
        tasks.iter().map(|t| (t.id.clone(), t.order)).collect()
    }

    #[test]
    fn test_create_appends_at_sibling_count() {
        let (mut data, _, milestone_id) = board_with_milestone();
        for expected in 0..4u32 {
            let task = data
                .create_task(&milestone_id, format!("T{}", expected), None, None, None, None, None)
                .unwrap();
            assert_eq!(task.order, expected);
        }
    }

    #[test]
    fn test_create_append_is_scoped_to_parent() {
        let (mut data, project_id, m1) = board_with_milestone();
        let m2 = data
            .create_milestone(&project_id, "Beta".to_string(), None, None, None, None)
            .unwrap()
            .id;
        data.create_task(&m1, "A".to_string(), None, None, None, None, None)
            .unwrap();
        let first_in_m2 = data
            .create_task(&m2, "B".to_string(), None, None, None, None, None)
            .unwrap();
        assert_eq!(first_in_m2.order, 0);
    }

    #[test]
    fn test_explicit_order_is_authoritative_and_leaves_gap() {
        let (mut data, _, milestone_id) = board_with_milestone();
        let a = data
            .create_task(&milestone_id, "A".to_string(), None, None, None, None, None)
            .unwrap();
        let b = data
            .create_task(&milestone_id, "B".to_string(), None, None, None, None, Some(0))
            .unwrap();

        // Both now claim order 0; siblings are not shifted
        assert_eq!(a.order, 0);
        assert_eq!(b.order, 0);

        // Reads stay deterministic: created_at (then id) breaks the tie
        let orders = task_orders(&data, &milestone_id);
        assert_eq!(orders[0].0, a.id);
        assert_eq!(orders[1].0, b.id);
    }

    #[test]
    fn test_reorder_assigns_index_for_each_id() {
        let (mut data, _, milestone_id) = board_with_milestone();
        let ids: Vec<String> = (0..3)
            .map(|i| {
                data.create_task(&milestone_id, format!("T{}", i), None, None, None, None, None)
                    .unwrap()
                    .id
            })
            .collect();

        let permutation = vec![ids[2].clone(), ids[0].clone(), ids[1].clone()];
        data.reorder_tasks(&milestone_id, &permutation).unwrap();

        let orders = task_orders(&data, &milestone_id);
        assert_eq!(
            orders,
            vec![
                (ids[2].clone(), 0),
                (ids[0].clone(), 1),
                (ids[1].clone(), 2)
            ]
        );
    }

    #[test]
    fn test_reorder_is_idempotent() {
        let (mut data, _, milestone_id) = board_with_milestone();
        let ids: Vec<String> = (0..4)
            .map(|i| {
                data.create_task(&milestone_id, format!("T{}", i), None, None, None, None, None)
                    .unwrap()
                    .id
            })
            .collect();

        let permutation = vec![ids[3].clone(), ids[1].clone(), ids[0].clone(), ids[2].clone()];
        data.reorder_tasks(&milestone_id, &permutation).unwrap();
        let first = task_orders(&data, &milestone_id);
        data.reorder_tasks(&milestone_id, &permutation).unwrap();
        let second = task_orders(&data, &milestone_id);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reorder_skips_foreign_ids() {
        let (mut data, project_id, m1) = board_with_milestone();
        let m2 = data
            .create_milestone(&project_id, "Beta".to_string(), None, None, None, None)
            .unwrap()
            .id;
        let own = data
            .create_task(&m1, "Mine".to_string(), None, None, None, None, None)
            .unwrap()
            .id;
        let foreign = data
            .create_task(&m2, "Other".to_string(), None, None, None, None, None)
            .unwrap()
            .id;

        data.reorder_tasks(&m1, &[foreign.clone(), own.clone()])
            .unwrap();

        // The foreign task's order is untouched; our task got index 1
        assert_eq!(data.find_task(&foreign).unwrap().order, 0);
        assert_eq!(data.find_task(&foreign).unwrap().milestone_id, m2);
        assert_eq!(data.find_task(&own).unwrap().order, 1);
    }

    #[test]
    fn test_reorder_unknown_parent_errors() {
        let (mut data, _, _) = board_with_milestone();
        let err = data.reorder_tasks("id_404", &[]).unwrap_err();
        assert!(matches!(err, BoardError::NotFound { .. }));
    }

    #[test]
    fn test_move_task_compacts_source_and_shifts_destination() {
        let (mut data, project_id, m1) = board_with_milestone();
        let m2 = data
            .create_milestone(&project_id, "Beta".to_string(), None, None, None, None)
            .unwrap()
            .id;
        let src: Vec<String> = (0..3)
            .map(|i| {
                data.create_task(&m1, format!("S{}", i), None, None, None, None, None)
                    .unwrap()
                    .id
            })
            .collect();
        let dst: Vec<String> = (0..2)
            .map(|i| {
                data.create_task(&m2, format!("D{}", i), None, None, None, None, None)
                    .unwrap()
                    .id
            })
            .collect();

        let moved = data.move_task(&src[1], &m2, 1).unwrap();
        assert_eq!(moved.milestone_id, m2);
        assert_eq!(moved.order, 1);

        // Source is dense again with the survivors in their old relative order
        assert_eq!(
            task_orders(&data, &m1),
            vec![(src[0].clone(), 0), (src[2].clone(), 1)]
        );
        // Destination made room at index 1
        assert_eq!(
            task_orders(&data, &m2),
            vec![(dst[0].clone(), 0), (src[1].clone(), 1), (dst[1].clone(), 2)]
        );
    }

    #[test]
    fn test_move_task_clamps_order_to_destination_len() {
        let (mut data, project_id, m1) = board_with_milestone();
        let m2 = data
            .create_milestone(&project_id, "Beta".to_string(), None, None, None, None)
            .unwrap()
            .id;
        let task_id = data
            .create_task(&m1, "Solo".to_string(), None, None, None, None, None)
            .unwrap()
            .id;

        let moved = data.move_task(&task_id, &m2, 99).unwrap();
        assert_eq!(moved.order, 0);
    }

    #[test]
    fn test_move_into_group_with_max_order_sibling() {
        let (mut data, project_id, m1) = board_with_milestone();
        let m2 = data
            .create_milestone(&project_id, "Beta".to_string(), None, None, None, None)
            .unwrap()
            .id;
        // Explicit-order create accepts any value as authoritative, so a
        // destination sibling can sit at u32::MAX before the move
        let saturated = data
            .create_task(&m2, "Edge".to_string(), None, None, None, None, Some(u32::MAX))
            .unwrap()
            .id;
        let task_id = data
            .create_task(&m1, "Incoming".to_string(), None, None, None, None, None)
            .unwrap()
            .id;

        let moved = data.move_task(&task_id, &m2, 0).unwrap();
        assert_eq!(moved.order, 0);

        // The move renumbered the destination to dense 0..n-1
        assert_eq!(
            task_orders(&data, &m2),
            vec![(task_id, 0), (saturated, 1)]
        );
    }

    #[test]
    fn test_move_task_within_same_milestone_repositions() {
        let (mut data, _, m1) = board_with_milestone();
        let ids: Vec<String> = (0..3)
            .map(|i| {
                data.create_task(&m1, format!("T{}", i), None, None, None, None, None)
                    .unwrap()
                    .id
            })
            .collect();

        data.move_task(&ids[2], &m1, 0).unwrap();
        assert_eq!(
            task_orders(&data, &m1),
            vec![(ids[2].clone(), 0), (ids[0].clone(), 1), (ids[1].clone(), 2)]
        );
    }

    #[test]
    fn test_move_task_to_unknown_milestone_errors() {
        let (mut data, _, m1) = board_with_milestone();
        let task_id = data
            .create_task(&m1, "T".to_string(), None, None, None, None, None)
            .unwrap()
            .id;
        let err = data.move_task(&task_id, "id_404", 0).unwrap_err();
        assert!(matches!(err, BoardError::InvalidReference { .. }));
        // Task stays where it was
        assert_eq!(data.find_task(&task_id).unwrap().milestone_id, m1);
    }

    #[test]
    fn test_delete_task_compacts_survivors() {
        let (mut data, _, m1) = board_with_milestone();
        let ids: Vec<String> = (0..3)
            .map(|i| {
                data.create_task(&m1, format!("T{}", i), None, None, None, None, None)
                    .unwrap()
                    .id
            })
            .collect();

        data.delete_task(&ids[0]).unwrap();
        assert_eq!(
            task_orders(&data, &m1),
            vec![(ids[1].clone(), 0), (ids[2].clone(), 1)]
        );
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let (mut data, _, m1) = board_with_milestone();
        let err = data
            .create_task(&m1, "   ".to_string(), None, None, None, None, None)
            .unwrap_err();
        assert!(matches!(err, BoardError::Validation(_)));
    }

    #[test]
    fn test_create_rejects_missing_parent() {
        let mut data = BoardData::new();
        let err = data
            .create_milestone("id_404", "M".to_string(), None, None, None, None)
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidReference { .. }));
    }

    #[test]
    fn test_parent_checks_reject_wrong_entity_kind() {
        let (mut data, project_id, milestone_id) = board_with_milestone();
        let task_id = data
            .create_task(&milestone_id, "T".to_string(), None, None, None, None, None)
            .unwrap()
            .id;

        // A known id of the wrong kind is as invalid as an unknown one
        let err = data
            .create_milestone(&milestone_id, "M".to_string(), None, None, None, None)
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidReference { .. }));

        let err = data
            .create_task(&project_id, "T".to_string(), None, None, None, None, None)
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidReference { .. }));

        let err = data.move_task(&task_id, &project_id, 0).unwrap_err();
        assert!(matches!(err, BoardError::InvalidReference { .. }));

        let err = data.reorder_tasks(&project_id, &[]).unwrap_err();
        assert!(matches!(err, BoardError::NotFound { .. }));
    }
}
