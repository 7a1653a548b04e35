//! Error types for scoring configuration and windows.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while building scoring inputs.
///
/// Scoring itself never fails; these errors cover invalid configuration and
/// malformed windows only.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoringError {
    /// The window starts after it ends.
    #[error("evaluation window starts on {start} after it ends on {end}")]
    InvertedWindow {
        /// First day of the window.
        start: NaiveDate,
        /// Last day of the window.
        end: NaiveDate,
    },

    /// The four weights do not add up to one.
    #[error("score weights must sum to 1.0 (got {sum:.3})")]
    WeightsDoNotSumToOne {
        /// Actual sum of the weights.
        sum: f64,
    },

    /// A coefficient lies outside `[0, 1]`.
    #[error("{name} must lie within [0, 1] (got {value})")]
    CoefficientOutOfRange {
        /// Name of the offending coefficient.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The configuration document could not be parsed.
    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(String),
}
