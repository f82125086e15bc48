//! # xorgconf-base
//!
//! Structural parser, validator, in-memory editor and serializer for the
//! Xorg display-server configuration format (`xorg.conf`).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! document  → XorgConfig: accessors, mutators, driver helpers
//!   ↓
//! hir       → Identifier registry, references, semantic validation
//!   ↓
//! syntax    → Model (sections, subsections, comment records), serializer
//!   ↓
//! parser    → Logos tokenizer, grammar rule table, line state machine, errors
//!   ↓
//! base      → SectionType and format keywords
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → document)
// ============================================================================

/// Foundation types: SectionType, keywords
pub mod base;

/// Parser: tokenizer, grammar table, structural state machine, errors
pub mod parser;

/// Syntax: the Model and its serializer
pub mod syntax;

/// Semantic layer: identifier registry and validation rules
pub mod hir;

/// Editing sessions: the `XorgConfig` document
pub mod document;

/// Model interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

pub use base::SectionType;
pub use document::{OptionStyle, OptionValue, XorgConfig};
pub use parser::{ErrorCode, ParseOptions, Reference, Result, StructuralError, XorgError};
pub use syntax::{FormatOptions, Model, WriteMode};
