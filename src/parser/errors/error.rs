//! Error types
//!
//! [`StructuralError`] rejects a whole document and only ever surfaces while
//! a document is being built. The lookup variants of [`XorgError`] are
//! per-call and leave the document usable.

use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::SectionType;

/// A document-wide, fatal error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}{}", .line.map(|l| format!(" (line {l})")).unwrap_or_default())]
pub struct StructuralError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// 1-based source line, when the error belongs to one line
    pub line: Option<usize>,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
}

impl StructuralError {
    /// Create a new structural error with minimal information
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            line: None,
            hint: None,
        }
    }

    /// Create an error carrying the code's default message
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    /// Attach the 1-based source line
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check if this error has a hint
    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Format the error for display, including the hint
    pub fn format(&self) -> String {
        let mut result = self.to_string();
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {hint}"));
        }
        result
    }
}

/// Errors returned by xorgconf operations.
#[derive(Debug, Error)]
pub enum XorgError {
    /// The document is not a valid xorg.conf.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// The addressed section has no such option.
    #[error("option {option:?} not found in {section} section at position {position}")]
    OptionNotFound {
        section: SectionType,
        option: String,
        position: usize,
    },

    /// No section of this type at this position.
    #[error("no {section} section at position {position}")]
    SectionNotFound { section: SectionType, position: usize },

    /// Identifier/position lookup failed.
    #[error("no {section} section matching {lookup:?}")]
    IdentifierNotFound { section: SectionType, lookup: String },

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl XorgError {
    pub(crate) fn option_not_found(section: SectionType, option: &str, position: usize) -> Self {
        Self::OptionNotFound {
            section,
            option: option.to_string(),
            position,
        }
    }

    pub(crate) fn identifier_not_found(section: SectionType, lookup: impl ToString) -> Self {
        Self::IdentifierNotFound {
            section,
            lookup: lookup.to_string(),
        }
    }

    /// The structural error code, if this is a structural error
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Structural(err) => Some(err.code),
            _ => None,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = XorgError> = std::result::Result<T, E>;
