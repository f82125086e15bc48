//! Common trait for export formats.

use serde::Serialize;

use super::InterchangeError;
use crate::document::XorgConfig;
use crate::hir::IdentifierRegistry;
use crate::syntax::Model;

/// What an export contains: the model and the registry derived from it
#[derive(Debug, Serialize)]
pub struct Export<'a> {
    pub model: &'a Model,
    pub registry: &'a IdentifierRegistry,
}

impl<'a> From<&'a XorgConfig> for Export<'a> {
    fn from(config: &'a XorgConfig) -> Self {
        Self {
            model: config.model(),
            registry: config.registry(),
        }
    }
}

/// Trait for export formats.
pub trait ModelFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    fn mime_type(&self) -> &'static str;

    /// Serialize a document to bytes.
    fn write(&self, config: &XorgConfig) -> Result<Vec<u8>, InterchangeError>;
}
