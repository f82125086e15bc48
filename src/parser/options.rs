//! Parse options

/// Options controlling how much validation runs when a document is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Run the semantic rules after the structural parse
    pub validate: bool,
    /// Treat broken references as fatal (only meaningful with `validate`)
    pub check_references: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            validate: true,
            check_references: true,
        }
    }
}

impl ParseOptions {
    /// Every rule except broken references; pair with
    /// `XorgConfig::fix_broken_references`
    pub fn lenient() -> Self {
        Self {
            validate: true,
            check_references: false,
        }
    }

    /// Structure and identifiers only
    pub fn unchecked() -> Self {
        Self {
            validate: false,
            check_references: false,
        }
    }
}
