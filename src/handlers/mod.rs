//! MCP tool handlers for the board server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler family is in a separate file for better organization.

pub mod create;
pub mod delete;
pub mod list;
pub mod move_task;
pub mod reorder;
pub mod update;
