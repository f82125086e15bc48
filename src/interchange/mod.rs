//! Export of parsed documents to data-interchange formats.
//!
//! - **JSON** - `serde_json`, pretty-printed
//! - **YAML** - `serde_yaml`
//!
//! ```text
//! XorgConfig ──► Export { model, registry } ──► ModelFormat::write ──► bytes
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use xorgconf::interchange::{Json, ModelFormat};
//!
//! let config = xorgconf::XorgConfig::from_path("/etc/X11/xorg.conf")?;
//! let bytes = Json.write(&config)?;
//! ```

mod error;
mod format;
mod formats;

pub use error::InterchangeError;
pub use format::{Export, ModelFormat};
pub use formats::{Json, Yaml};

use crate::document::XorgConfig;

/// Export a document as pretty-printed JSON
pub fn to_json(config: &XorgConfig) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string_pretty(&Export::from(config))?)
}

/// Export a document as YAML
pub fn to_yaml(config: &XorgConfig) -> Result<String, InterchangeError> {
    Ok(serde_yaml::to_string(&Export::from(config))?)
}
