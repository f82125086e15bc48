//! JSON and YAML export.
//!
//! Both formats share one structure:
//!
//! ```yaml
//! model:
//!   sections:
//!     Device:
//!     - handle: 0
//!       content: !Section
//!       - Identifier "Card0"
//!   free_comments: []
//! registry:
//!   entries:
//!     Device:
//!     - identifier: Card0
//!       position: 0
//! ```

use super::format::Export;
use super::{InterchangeError, ModelFormat};
use crate::document::XorgConfig;

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl ModelFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, config: &XorgConfig) -> Result<Vec<u8>, InterchangeError> {
        Ok(serde_json::to_vec_pretty(&Export::from(config))?)
    }
}

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl ModelFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn write(&self, config: &XorgConfig) -> Result<Vec<u8>, InterchangeError> {
        Ok(serde_yaml::to_string(&Export::from(config))?.into_bytes())
    }
}
