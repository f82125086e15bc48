//! Editing sessions over an xorg.conf document.
//!
//! [`XorgConfig`] owns the live [`Model`] and its [`IdentifierRegistry`].
//! Queries read the live model; every mutation edits it in place and then
//! rebuilds the registry so positions and identifiers stay in step. An edit
//! that would leave a section without its identifier, duplicate an
//! identifier or write a malformed line is rolled back and returned as a
//! structural error.
//! Serialization works on a [`Snapshot`] taken at write time: the model is
//! held behind an `Arc` and copied on the first edit after a snapshot, so a
//! render in progress never observes a mutation.
//!
//! ## Usage
//!
//! ```
//! use xorgconf::{OptionStyle, SectionType, XorgConfig};
//!
//! let source = "Section \"Device\"\n\tIdentifier \"Card0\"\n\tDriver \"nv\"\nEndSection\n";
//! let mut config: XorgConfig = source.parse().unwrap();
//! config
//!     .add_option(SectionType::Device, "VideoRam", "16384", OptionStyle::Keyword, Some(0))
//!     .unwrap();
//! assert!(config.to_text().contains("\tVideoRam \"16384\""));
//! ```

mod accessors;
mod drivers;
mod editing;
mod value;


use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::hir::{IdentifierRegistry, check_edit, validate};
use crate::parser::{ParseOptions, Result};
use crate::syntax::file::{load_file, read_source, write_file, write_stream};
use crate::syntax::{FormatOptions, Model, Snapshot, WriteMode, parse_content, render};

pub use value::{OptionStyle, OptionValue};

/// A parsed, validated and editable xorg.conf document
#[derive(Debug, Clone, Default)]
pub struct XorgConfig {
    model: Arc<Model>,
    registry: IdentifierRegistry,
}

impl XorgConfig {
    /// An empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and fully validate a document
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with(source, ParseOptions::default())
    }

    /// Parse a document, running the semantic rules `options` asks for.
    ///
    /// # Errors
    ///
    /// `XorgError::Structural` on the first nesting, identifier, syntax,
    /// reference or layout violation.
    pub fn parse_with(source: &str, options: ParseOptions) -> Result<Self> {
        let model = parse_content(source)?;
        if source.trim().is_empty() {
            debug!("empty source, nothing to validate");
            return Ok(Self {
                model: Arc::new(model),
                registry: IdentifierRegistry::default(),
            });
        }

        let registry = IdentifierRegistry::build(&model)?;
        if options.validate {
            validate(&model, &registry, &options)?;
        }
        debug!(
            validate = options.validate,
            check_references = options.check_references,
            "document ready"
        );
        Ok(Self {
            model: Arc::new(model),
            registry,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with(path, ParseOptions::default())
    }

    pub fn from_path_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let source = load_file(path.as_ref())?;
        Self::parse_with(&source, options)
    }

    /// Read a whole document from an open reader; the reader stays open
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_reader_with(reader, ParseOptions::default())
    }

    pub fn from_reader_with(reader: impl Read, options: ParseOptions) -> Result<Self> {
        let source = read_source(reader)?;
        Self::parse_with(&source, options)
    }

    // ── Output ──────────────────────────────────────────────────────

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    /// Immutable view of the current model for serialization
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(Arc::clone(&self.model))
    }

    pub fn to_text(&self) -> String {
        self.to_text_with(&FormatOptions::default())
    }

    pub fn to_text_with(&self, options: &FormatOptions) -> String {
        render(&self.snapshot(), options)
    }

    /// Write the document to a path, truncating or appending
    pub fn write_to_path(&self, path: impl AsRef<Path>, mode: WriteMode) -> Result<()> {
        write_file(path.as_ref(), &self.to_text(), mode)?;
        Ok(())
    }

    /// Write the document to an open writer as UTF-8; the writer stays open
    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        write_stream(writer, &self.to_text())?;
        Ok(())
    }

    // ── Mutation plumbing ───────────────────────────────────────────

    /// Apply `change` to the live model and rebuild the registry.
    ///
    /// The edited model must still satisfy [`check_edit`]; otherwise the
    /// previous model is restored and the violation returned.
    fn edit<T>(&mut self, change: impl FnOnce(&mut Model) -> T) -> Result<T> {
        let previous = Arc::clone(&self.model);
        let outcome = change(Arc::make_mut(&mut self.model));
        match check_edit(&previous, &self.model) {
            Ok(registry) => {
                self.registry = registry;
                Ok(outcome)
            }
            Err(err) => {
                debug!(code = %err.code, "edit rejected, model restored");
                self.model = previous;
                Err(err.into())
            }
        }
    }
}

impl FromStr for XorgConfig {
    type Err = crate::parser::XorgError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for XorgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
