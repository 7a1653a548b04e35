//! Domain model for productivity scoring.
//!
//! Every function here is pure: identical inputs always produce identical
//! scores, and degenerate inputs (no tasks, no workdays) score `0.0` rather
//! than failing.

mod config;
pub mod engine;
mod error;
mod history;
mod scored_task;
mod window;

pub use config::{OutputBasis, ScoreWeights, ScoringConfig, WEIGHT_SUM_TOLERANCE};
pub use engine::{ProductivityScore, ScoringEngine};
pub use error::ScoringError;
pub use history::StatusTransition;
pub use scored_task::ScoredTask;
pub use window::{EvaluationWindow, is_workday, workday_count};
