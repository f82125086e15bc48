//! Semantic layer over the syntax model.
//!
//! ## Key Types
//!
//! - [`IdentifierRegistry`] - identifiers of every section type that needs one
//! - [`ReferenceMap`] - references grouped by target type
//!
//! ## Layers
//!
//! ```text
//! Model                        ← syntax layer
//!     │
//!     ▼
//! IdentifierRegistry::build    ← (identifier, position) per type
//!     │
//!     ▼
//! references_of / resolve      ← keyword lines → target identifiers
//!     │
//!     ▼
//! validate                     ← duplicate, syntax, reference, layout rules
//! check_edit                   ← identifier and syntax rules after an edit
//! ```

mod diagnostics;
mod registry;

pub use diagnostics::{
    ReferenceMap, broken_references, check_edit, default_server_layout, duplicate_identifiers,
    duplicate_options, references_of, validate,
};
pub use registry::{IdentifierRegistry, RegistryEntry, identifiers_in};
