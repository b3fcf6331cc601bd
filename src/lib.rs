//! Board MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a
//! hierarchical task board: projects contain ordered milestones, which
//! contain ordered tasks, with drag-and-drop style reordering,
//! cross-milestone task moves, due dates, and status tracking.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `BoardServerHandler` - handles MCP protocol communication
//! - **Domain Layer**: `board` module - entity store, ordering engine,
//!   nested views and cascade deletion
//! - **Persistence Layer**: `storage` module - file-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use taskboard_mcp::BoardServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = BoardServerHandler::new("board.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod board;
mod formatting;
mod handlers;
mod storage;
mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::Mutex;

// Re-export commonly used types
pub use board::{
    BoardData, BoardError, Milestone, MilestonePatch, MilestoneView, Project, ProjectPatch,
    ProjectView, Status, Task, TaskPatch,
};
pub use storage::Storage;

/// MCP server handler for the task board
///
/// All mutations and reads go through one `Mutex<BoardData>`: writers are
/// serialized, and readers assemble their nested view under the same guard,
/// so no caller ever observes a sibling group mid-renumbering. Every
/// successful mutation is persisted to the TOML data file before returning.
pub struct BoardServerHandler {
    pub(crate) data: Mutex<BoardData>,
    pub(crate) storage: Storage,
}

impl BoardServerHandler {
    /// Create a new board server handler backed by `storage_path`
    ///
    /// # Example
    /// ```no_run
    /// # use taskboard_mcp::BoardServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = BoardServerHandler::new("board.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self { data, storage })
    }

    /// Persist the current board state to the data file
    fn save_data(&self) -> Result<()> {
        let data = self.data.lock().unwrap();
        self.storage.save(&data)?;
        Ok(())
    }
}

/// Hierarchical task board server: Projects contain ordered Milestones,
/// Milestones contain ordered Tasks.
///
/// Every sibling group keeps a dense zero-based `order` (0..n-1). Creates
/// append to the end of their group; reorder tools take the complete new id
/// sequence for one group; move_task re-parents a task between milestones
/// while keeping both groups dense. Deleting a project or milestone
/// cascades to all its descendants.
///
/// Statuses: "Not Started", "In Progress", "Deferred", "Blocked",
/// "Complete". Dates use YYYY-MM-DD. Ids are assigned by the server.
#[mcp_server]
impl McpServer for BoardServerHandler {
    /// **List**: Full nested board - projects in board order, each with its
    /// milestones and their tasks, every level sorted by position.
    #[tool]
    async fn list_projects(&self) -> McpResult<String> {
        self.handle_list_projects().await
    }

    /// **Get**: One project with its milestones and tasks.
    #[tool]
    async fn get_project(
        &self,
        /// Project ID
        id: String,
    ) -> McpResult<String> {
        self.handle_get_project(id).await
    }

    /// **Create project**: New top-level project, appended to the board end
    /// unless an explicit order is given (explicit orders are taken as-is;
    /// run reorder_projects to restore density).
    #[tool]
    async fn create_project(
        &self,
        /// Display name (must be non-empty)
        name: String,
        /// Free-form notes in Markdown (optional)
        details: Option<String>,
        /// Due date YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// Explicit position; omit to append (optional)
        order: Option<u32>,
    ) -> McpResult<String> {
        self.handle_create_project(name, details, due_date, order).await
    }

    /// **Update project**: Partial update - only supplied fields change.
    /// Use ""(empty string) to clear details or due_date.
    #[tool]
    async fn update_project(
        &self,
        /// Project ID
        id: String,
        /// New name (optional)
        name: Option<String>,
        /// New details, ""=clear (optional)
        details: Option<String>,
        /// New due date YYYY-MM-DD, ""=clear (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_project(id, name, details, due_date).await
    }

    /// **Delete project**: Removes the project AND all its milestones and
    /// their tasks. Remaining projects are renumbered to 0..n-1.
    #[tool]
    async fn delete_project(
        &self,
        /// Project ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_project(id).await
    }

    /// **Reorder projects**: Supply the complete new project id sequence;
    /// each id gets order = its index. Unknown ids are skipped.
    #[tool]
    async fn reorder_projects(
        &self,
        /// All project IDs in their new order
        ordered_ids: Vec<String>,
    ) -> McpResult<String> {
        self.handle_reorder_projects(ordered_ids).await
    }

    /// **Create milestone**: New milestone under a project, appended unless
    /// an explicit order is given. Status defaults to "Not Started".
    #[tool]
    async fn create_milestone(
        &self,
        /// Owning project ID
        project_id: String,
        /// Display name (must be non-empty)
        name: String,
        /// Free-form notes (optional)
        details: Option<String>,
        /// Status: Not Started/In Progress/Deferred/Blocked/Complete (optional)
        status: Option<String>,
        /// Due date YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// Explicit position; omit to append (optional)
        order: Option<u32>,
    ) -> McpResult<String> {
        self.handle_create_milestone(project_id, name, details, status, due_date, order)
            .await
    }

    /// **Update milestone**: Partial update - only supplied fields change.
    /// Use ""(empty string) to clear details or due_date.
    #[tool]
    async fn update_milestone(
        &self,
        /// Milestone ID
        id: String,
        /// New name (optional)
        name: Option<String>,
        /// New details, ""=clear (optional)
        details: Option<String>,
        /// New status (optional)
        status: Option<String>,
        /// New due date YYYY-MM-DD, ""=clear (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_milestone(id, name, details, status, due_date)
            .await
    }

    /// **Delete milestone**: Removes the milestone AND all its tasks. The
    /// project's remaining milestones are renumbered to 0..n-1.
    #[tool]
    async fn delete_milestone(
        &self,
        /// Milestone ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_milestone(id).await
    }

    /// **Reorder milestones**: Supply the complete new milestone id sequence
    /// for one project; each id gets order = its index. Ids not belonging to
    /// the project are skipped.
    #[tool]
    async fn reorder_milestones(
        &self,
        /// Owning project ID
        project_id: String,
        /// All the project's milestone IDs in their new order
        ordered_ids: Vec<String>,
    ) -> McpResult<String> {
        self.handle_reorder_milestones(project_id, ordered_ids).await
    }

    /// **Create task**: New task under a milestone, appended unless an
    /// explicit order is given. `completed` is a checkbox flag independent
    /// of `status`; both default to not-done.
    #[tool]
    async fn create_task(
        &self,
        /// Owning milestone ID
        milestone_id: String,
        /// Display name (must be non-empty)
        name: String,
        /// Free-form notes (optional)
        details: Option<String>,
        /// Status: Not Started/In Progress/Deferred/Blocked/Complete (optional)
        status: Option<String>,
        /// Completion checkbox, defaults to false (optional)
        completed: Option<bool>,
        /// Due date YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// Explicit position; omit to append (optional)
        order: Option<u32>,
    ) -> McpResult<String> {
        self.handle_create_task(milestone_id, name, details, status, completed, due_date, order)
            .await
    }

    /// **Update task**: Partial update - only supplied fields change. Use
    /// ""(empty string) to clear details or due_date. Setting milestone_id
    /// re-parents the task without repositioning; prefer move_task when the
    /// position in the new milestone matters.
    #[tool]
    async fn update_task(
        &self,
        /// Task ID
        id: String,
        /// New name (optional)
        name: Option<String>,
        /// New details, ""=clear (optional)
        details: Option<String>,
        /// New status (optional)
        status: Option<String>,
        /// New completion flag (optional)
        completed: Option<bool>,
        /// New due date YYYY-MM-DD, ""=clear (optional)
        due_date: Option<String>,
        /// New owning milestone ID (optional)
        milestone_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_task(id, name, details, status, completed, due_date, milestone_id)
            .await
    }

    /// **Delete task**: Removes one task; the milestone's remaining tasks
    /// are renumbered to 0..n-1.
    #[tool]
    async fn delete_task(
        &self,
        /// Task ID
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(id).await
    }

    /// **Reorder tasks**: Supply the complete new task id sequence for one
    /// milestone; each id gets order = its index. Ids not belonging to the
    /// milestone are skipped.
    #[tool]
    async fn reorder_tasks(
        &self,
        /// Owning milestone ID
        milestone_id: String,
        /// All the milestone's task IDs in their new order
        ordered_ids: Vec<String>,
    ) -> McpResult<String> {
        self.handle_reorder_tasks(milestone_id, ordered_ids).await
    }

    /// **Move task**: Drag a task into another milestone (or reposition it
    /// in its own) at the given index. Source and destination groups both
    /// stay dense; an index past the end appends.
    #[tool]
    async fn move_task(
        &self,
        /// Task ID
        task_id: String,
        /// Destination milestone ID
        new_milestone_id: String,
        /// Zero-based position in the destination
        new_order: u32,
    ) -> McpResult<String> {
        self.handle_move_task(task_id, new_milestone_id, new_order).await
    }
}
