//! Unit tests for productivity scoring.
