//! Keywords of the xorg.conf format.
//!
//! All keywords are matched case-insensitively by the parser.

pub const SECTION: &str = "Section";
pub const END_SECTION: &str = "EndSection";
pub const SUBSECTION: &str = "SubSection";
pub const END_SUBSECTION: &str = "EndSubSection";

/// Prefix of the `Option "Name" "Value"` line form.
pub const OPTION: &str = "Option";

pub const IDENTIFIER: &str = "Identifier";
pub const DRIVER: &str = "Driver";
pub const DEFAULT_SERVER_LAYOUT: &str = "DefaultServerLayout";

pub const COMMENT_PREFIX: char = '#';

/// Value reported for a value-less `Option "Name"` line.
pub const TRUE_VALUE: &str = "True";

/// Single-token lines accepted by the option syntax check.
pub const WHITELISTED_LINES: &[&str] = &["EndMode"];
