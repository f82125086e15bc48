//! Error code definitions for structural errors
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Nesting and tag errors (Section/SubSection markers)
//! - E02xx: Identifier errors
//! - E03xx: Option syntax errors
//! - E04xx: Reference errors
//! - E05xx: Layout rules (ServerLayout, DefaultServerLayout)

use std::fmt;

/// Error codes for structural errors
///
/// Each code names one rule of the format, so callers can tell which rule a
/// rejected document broke without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Nesting and tag errors
    // =========================================================================
    /// Section name is not a recognized section type
    E0101,
    /// `Section` while another section is open
    E0102,
    /// Unbalanced Section/SubSection tags at end of input
    E0103,
    /// `EndSection` outside a section, or with a subsection still open
    E0104,
    /// `SubSection` outside a section, or inside another subsection
    E0105,
    /// `EndSubSection` outside a subsection
    E0106,
    /// Section or subsection marker without a name
    E0107,
    /// Content line outside any section
    E0108,

    // =========================================================================
    // E02xx: Identifier errors
    // =========================================================================
    /// Missing `Identifier` in a section that requires one
    E0201,
    /// More than one `Identifier` line in a single section
    E0202,
    /// Two sections of one type share an identifier
    E0203,
    /// Registry size differs from the number of sections
    E0204,

    // =========================================================================
    // E03xx: Option syntax errors
    // =========================================================================
    /// Option line with fewer than two tokens or a non-alphabetic keyword
    E0301,

    // =========================================================================
    // E04xx: Reference errors
    // =========================================================================
    /// Reference to an identifier that does not exist
    E0401,

    // =========================================================================
    // E05xx: Layout rules
    // =========================================================================
    /// ServerLayout without a Screen reference
    E0501,
    /// More than one DefaultServerLayout
    E0502,
    /// DefaultServerLayout names an unknown ServerLayout
    E0503,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            Self::E0107 => "E0107",
            Self::E0108 => "E0108",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
            Self::E0401 => "E0401",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101
            | Self::E0102
            | Self::E0103
            | Self::E0104
            | Self::E0105
            | Self::E0106
            | Self::E0107
            | Self::E0108 => "nesting error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "identifier error",
            Self::E0301 => "option syntax error",
            Self::E0401 => "reference error",
            Self::E0501 | Self::E0502 | Self::E0503 => "layout error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid section name",
            Self::E0102 => "section opened inside another section",
            Self::E0103 => "unbalanced section tags",
            Self::E0104 => "unexpected EndSection",
            Self::E0105 => "unexpected SubSection",
            Self::E0106 => "unexpected EndSubSection",
            Self::E0107 => "missing section name",
            Self::E0108 => "content outside a section",
            Self::E0201 => "missing identifier",
            Self::E0202 => "repeated identifier option",
            Self::E0203 => "duplicate identifier",
            Self::E0204 => "identifier count mismatch",
            Self::E0301 => "malformed option",
            Self::E0401 => "broken reference",
            Self::E0501 => "server layout without screen",
            Self::E0502 => "multiple default server layouts",
            Self::E0503 => "unknown default server layout",
        }
    }

    /// Check if this is a nesting error (tag-related)
    pub fn is_nesting(&self) -> bool {
        self.category_description() == "nesting error"
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
