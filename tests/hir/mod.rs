//! HIR layer tests
//!
//! - Identifier registry construction
//! - Semantic validation rules and their non-fatal queries

pub mod tests_registry;
pub mod tests_validation;
