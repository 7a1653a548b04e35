//! Productivity scoring for task owners.
//!
//! Turns a member's tasks and their status history into four normalised
//! sub-scores (output, quality, reliability, consistency) and a weighted
//! composite over an evaluation window. The module follows hexagonal
//! architecture:
//!
//! - Scoring formulas, configuration, and workday counting in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
