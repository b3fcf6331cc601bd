use std::fmt;
use thiserror::Error;

/// Entity kind, used in error messages and the store's id index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Project,
    Milestone,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Project => "project",
            EntityKind::Milestone => "milestone",
            EntityKind::Task => "task",
        })
    }
}

/// Domain errors raised by the board store and ordering engine
///
/// Handlers translate these into MCP protocol errors; the domain layer
/// never retries and never partially applies a failed operation.
#[derive(Debug, Error)]
pub enum BoardError {
    /// An operation targeted an id that is not in the store
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    /// A create or move referenced a parent id that is not in the store
    #[error("referenced {kind} '{id}' does not exist")]
    InvalidReference { kind: EntityKind, id: String },

    /// Malformed input: empty name, bad date, bad status
    #[error("{0}")]
    Validation(String),
}

impl BoardError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        BoardError::NotFound { kind, id: id.into() }
    }

    pub fn invalid_reference(kind: EntityKind, id: impl Into<String>) -> Self {
        BoardError::InvalidReference { kind, id: id.into() }
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
