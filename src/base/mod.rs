//! Foundation types for xorgconf.
//!
//! This module provides the vocabulary shared by every other layer:
//! - [`SectionType`] - The closed set of recognized section kinds
//! - [`constants`] - Format keywords (`Section`, `Identifier`, ...)
//!
//! This module has NO dependencies on other xorgconf modules.

pub mod constants;
mod section;

pub use section::SectionType;
