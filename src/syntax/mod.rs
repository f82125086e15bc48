//! Syntax layer: the document model, the structural parser that builds it,
//! and the serializer that writes it back.

pub mod file;
pub mod formatter;
pub mod model;
pub mod parser;

pub use file::WriteMode;
pub use formatter::{FormatOptions, Snapshot, render};
pub use model::{CommentOwner, CommentRecord, Content, Handle, Instance, Model, SubSectionRecord};
pub use parser::parse_content;
