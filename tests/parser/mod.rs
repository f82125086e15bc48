//! Parser layer tests
//!
//! - Line tokenizer: quoting, comments, empty values
//! - Structural parser: nesting rules and the errors they raise

pub mod tests_structure;
pub mod tests_tokenizer;
