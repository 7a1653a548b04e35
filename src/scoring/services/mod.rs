//! Service layer for productivity scoring.

mod productivity;

pub use productivity::{ProductivityService, ScoringServiceError, ScoringServiceResult};
