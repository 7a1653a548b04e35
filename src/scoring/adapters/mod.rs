//! Adapter implementations for scoring ports.

pub mod memory;
