//! In-memory adapters for tests and local tooling.

mod history;

pub use history::InMemoryScoringHistory;
