//! Port contracts for productivity scoring.

mod history;

pub use history::{ScoringHistorySource, ScoringSourceError, ScoringSourceResult};
