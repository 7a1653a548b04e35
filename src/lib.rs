//! Taskboard: workflow rules and productivity scoring for a role-based task
//! board.
//!
//! This crate holds the decision core of a task-management application:
//! who may move a task between statuses, how statuses map onto board
//! columns, and how a member's completed work is scored.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`access`]: Roles, permissions, and relational access checks
//! - [`task`]: Task status workflow and Kanban projection
//! - [`scoring`]: Productivity sub-scores and composite

pub mod access;
pub mod scoring;
pub mod task;
