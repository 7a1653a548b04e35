//! Role and ownership based access control.
//!
//! The access context answers "may this member do that?" questions for the
//! rest of the crate. Every predicate is pure: callers resolve relational
//! facts such as direct reports or department membership beforehand and pass
//! them in.
//!
//! - Domain types and predicates in [`domain`]

pub mod domain;

#[cfg(test)]
mod tests;
