//! Board domain models and business logic
//!
//! This module contains the core board data structures and their
//! implementations, split into submodules:
//! - `entity`: Project, Milestone and Task records plus the shared Status
//! - `patch`: partial-update structures, one Option per mutable field
//! - `board_data`: the entity store and cascade deletion
//! - `ordering`: the ordering engine (dense sibling orders)
//! - `views`: nested read views assembled at read time
//! - `error`: domain error kinds
//! - `serde_impl`: serialization with id-index rebuild on load

mod board_data;
mod entity;
mod error;
mod ordering;
mod patch;
mod serde_impl;
mod views;

// Re-export all public types
pub use board_data::BoardData;
pub use entity::{Milestone, Project, Status, Task, now_utc};
pub use error::{BoardError, BoardResult, EntityKind};
pub use patch::{MilestonePatch, ProjectPatch, TaskPatch};
pub use views::{MilestoneView, ProjectView};
