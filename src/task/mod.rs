//! Task workflow for the task board.
//!
//! This module decides which status changes a member may make to a task,
//! and projects the workflow onto the Kanban board. The module follows
//! hexagonal architecture:
//!
//! - Domain types, the transition rule table, and the board projection in
//!   [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
