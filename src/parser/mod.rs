//! Line-level parsing for xorg.conf
//!
//! ```text
//! Raw line
//!     ↓
//! Lexer (logos) → Tokens (text + quoted flag)
//!     ↓
//! Grammar → OptionLine (name, values) and Reference per section rules
//! ```
//!
//! The structural state machine that strings lines into sections lives in
//! [`crate::syntax::parser`]; this module knows nothing about nesting.

mod errors;
pub mod grammar;
pub mod lexer;
mod options;

pub use errors::{ErrorCode, Result, StructuralError, XorgError};
pub use grammar::{OptionLine, Reference, ReferenceForm, ReferenceRule, SectionRules, section_rules};
pub use lexer::{Lexer, Token, tokenize, tokenize_with_empty};
pub use options::ParseOptions;
