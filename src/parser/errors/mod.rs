//! Parser error handling module
//!
//! This module provides the error types for the whole crate:
//! - Categorized error codes for every structural rule
//! - Structural errors carrying line numbers and hints
//! - The lookup errors returned by per-call queries

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{Result, StructuralError, XorgError};
