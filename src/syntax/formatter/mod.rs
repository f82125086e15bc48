//! Serializer for xorg.conf models
//!
//! Rendering reads from a [`Snapshot`], an immutable shared view of the
//! model taken when writing starts. Comment records and subsection records
//! are merged back into their owning blocks while the text is produced; the
//! live model is never touched.
//!
//! Comments keep their owner but not their place within it. A section is
//! written as its option lines, then its subsections, then its comments, so
//! a comment that sat between two options in the source moves to the end of
//! the section on the first rewrite. The same holds inside subsections.
//! Rewriting that output again is stable.

mod options;


use std::sync::Arc;

use tracing::trace;

use super::model::{CommentOwner, Handle, Model};
use crate::base::SectionType;
use crate::base::constants::{END_SECTION, END_SUBSECTION, SECTION, SUBSECTION};
pub use options::FormatOptions;

/// Immutable view of a model at one point in time
#[derive(Debug, Clone)]
pub struct Snapshot {
    model: Arc<Model>,
}

impl Snapshot {
    pub fn new(model: Arc<Model>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

impl From<Model> for Snapshot {
    fn from(model: Model) -> Self {
        Self::new(Arc::new(model))
    }
}

/// Render a snapshot as xorg.conf text.
///
/// Free comments come first, then one block per live section grouped by
/// type. Types follow the order in which the model first met them (source
/// order for a parsed document, creation order for new types) and sections
/// within a type follow their positions. Commented-out sections follow the
/// live sections of their type.
pub fn render(snapshot: &Snapshot, options: &FormatOptions) -> String {
    let model = snapshot.model();
    let mut out = String::new();

    for line in model.free_comments() {
        out.push_str(line);
        out.push('\n');
    }
    if !model.free_comments().is_empty() {
        out.push('\n');
    }

    let mut blocks = 0usize;
    for section in model.section_types() {
        for instance in model.instances(section) {
            if let Some(lines) = instance.lines() {
                render_section(&mut out, model, section, instance.handle, lines, options);
                out.push('\n');
                blocks += 1;
            }
        }
        for record in model.detached_comments(section) {
            for line in &record.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    trace!(blocks, bytes = out.len(), "rendered xorg.conf");
    out
}

fn render_section(
    out: &mut String,
    model: &Model,
    section: SectionType,
    handle: Handle,
    lines: &[String],
    options: &FormatOptions,
) {
    let indent = options.indent(1);
    let nested = options.indent(2);

    out.push_str(&format!("{SECTION} \"{section}\"\n"));
    push_lines(out, &indent, lines);

    for (sub_handle, record) in model.subsections_of(handle) {
        out.push_str(&format!("{indent}{SUBSECTION} \"{}\"\n", record.name));
        push_lines(out, &nested, &record.lines);
        push_lines(out, &nested, model.comments_for(CommentOwner::SubSection(sub_handle)));
        out.push_str(&format!("{indent}{END_SUBSECTION}\n"));
    }

    push_lines(out, &indent, model.comments_for(CommentOwner::Section(handle)));
    out.push_str(END_SECTION);
    out.push('\n');
}

fn push_lines(out: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
}
