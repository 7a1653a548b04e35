//! In-memory adapters for tests and local tooling.

mod directory;

pub use directory::InMemoryWorkflowDirectory;
