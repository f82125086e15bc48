//! Structural parser.
//!
//! A line-oriented state machine over `Section`/`SubSection` markers and
//! comments. It checks nesting and tag balance only; identifiers, option
//! syntax and references are checked by the semantic layer afterwards.

use tracing::debug;

use super::model::{CommentOwner, Handle, Model};
use crate::base::SectionType;
use crate::base::constants::{COMMENT_PREFIX, END_SECTION, END_SUBSECTION, SECTION, SUBSECTION};
use crate::parser::lexer::{Token, tokenize};
use crate::parser::{ErrorCode, StructuralError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InSection {
        section: SectionType,
        handle: Handle,
    },
    InSubSection {
        section: SectionType,
        owner: Handle,
        subsection: Handle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Section,
    EndSection,
    SubSection,
    EndSubSection,
}

impl Marker {
    fn classify(keyword: &str) -> Option<Self> {
        [
            (SECTION, Self::Section),
            (END_SECTION, Self::EndSection),
            (SUBSECTION, Self::SubSection),
            (END_SUBSECTION, Self::EndSubSection),
        ]
        .into_iter()
        .find(|(kw, _)| kw.eq_ignore_ascii_case(keyword))
        .map(|(_, marker)| marker)
    }
}

/// Parse xorg.conf text into a [`Model`].
///
/// # Errors
///
/// Returns a [`StructuralError`] for an unknown section name, illegal
/// nesting, content outside any section, or unbalanced tags.
pub fn parse_content(source: &str) -> Result<Model, StructuralError> {
    let mut parser = StructuralParser::new();
    for (index, line) in source.lines().enumerate() {
        parser.line(index + 1, line)?;
    }
    parser.finish()
}

struct StructuralParser {
    model: Model,
    state: State,
    section_tags: usize,
    subsection_tags: usize,
}

impl StructuralParser {
    fn new() -> Self {
        Self {
            model: Model::new(),
            state: State::Outside,
            section_tags: 0,
            subsection_tags: 0,
        }
    }

    fn line(&mut self, line_no: usize, raw: &str) -> Result<(), StructuralError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        if trimmed.starts_with(COMMENT_PREFIX) {
            self.comment(raw, trimmed);
            return Ok(());
        }

        let tokens = tokenize(trimmed);
        let marker = tokens.first().and_then(|t| Marker::classify(t.as_str()));
        match marker {
            Some(Marker::Section) => self.open_section(line_no, tokens.get(1)),
            Some(Marker::EndSection) => self.close_section(line_no),
            Some(Marker::SubSection) => self.open_subsection(line_no, tokens.get(1)),
            Some(Marker::EndSubSection) => self.close_subsection(line_no),
            None => self.content(line_no, trimmed),
        }
    }

    fn comment(&mut self, raw: &str, trimmed: &str) {
        match self.state {
            State::Outside => self.model.push_free_comment(raw.trim_end()),
            State::InSection { section, handle } => {
                self.model
                    .push_comment(section, CommentOwner::Section(handle), trimmed)
            }
            State::InSubSection {
                section,
                subsection,
                ..
            } => self
                .model
                .push_comment(section, CommentOwner::SubSection(subsection), trimmed),
        }
    }

    fn open_section(&mut self, line_no: usize, name: Option<&Token>) -> Result<(), StructuralError> {
        if self.state != State::Outside {
            return Err(StructuralError::from_code(ErrorCode::E0102)
                .with_line(line_no)
                .with_hint("add EndSection before starting a new section"));
        }
        let name = name.ok_or_else(|| StructuralError::from_code(ErrorCode::E0107).with_line(line_no))?;
        let section = SectionType::from_name(name.as_str()).ok_or_else(|| {
            StructuralError::new(ErrorCode::E0101, format!("invalid section name {:?}", name.as_str()))
                .with_line(line_no)
        })?;

        self.section_tags += 1;
        let handle = self.model.push_section(section, Vec::new());
        self.state = State::InSection { section, handle };
        Ok(())
    }

    fn close_section(&mut self, line_no: usize) -> Result<(), StructuralError> {
        match self.state {
            State::InSection { .. } => {
                self.section_tags += 1;
                self.state = State::Outside;
                Ok(())
            }
            State::InSubSection { .. } => Err(StructuralError::new(
                ErrorCode::E0104,
                "EndSection while a subsection is open",
            )
            .with_line(line_no)
            .with_hint("add EndSubSection first")),
            State::Outside => Err(StructuralError::new(
                ErrorCode::E0104,
                "EndSection outside a section",
            )
            .with_line(line_no)),
        }
    }

    fn open_subsection(&mut self, line_no: usize, name: Option<&Token>) -> Result<(), StructuralError> {
        let State::InSection { section, handle } = self.state else {
            let message = if self.state == State::Outside {
                "SubSection outside a section"
            } else {
                "SubSection inside another subsection"
            };
            return Err(StructuralError::new(ErrorCode::E0105, message).with_line(line_no));
        };
        let name = name.ok_or_else(|| StructuralError::from_code(ErrorCode::E0107).with_line(line_no))?;

        self.subsection_tags += 1;
        let subsection = self
            .model
            .push_subsection(section, handle, name.as_str(), Vec::new());
        self.state = State::InSubSection {
            section,
            owner: handle,
            subsection,
        };
        Ok(())
    }

    fn close_subsection(&mut self, line_no: usize) -> Result<(), StructuralError> {
        let State::InSubSection { section, owner, .. } = self.state else {
            return Err(StructuralError::from_code(ErrorCode::E0106).with_line(line_no));
        };
        self.subsection_tags += 1;
        self.state = State::InSection {
            section,
            handle: owner,
        };
        Ok(())
    }

    fn content(&mut self, line_no: usize, trimmed: &str) -> Result<(), StructuralError> {
        match self.state {
            State::Outside => Err(StructuralError::new(
                ErrorCode::E0108,
                format!("content outside a section: {trimmed:?}"),
            )
            .with_line(line_no)),
            State::InSection { section, handle } => {
                if let Some(lines) = self.model.lines_of_mut(section, handle) {
                    lines.push(trimmed.to_string());
                }
                Ok(())
            }
            State::InSubSection { subsection, .. } => {
                if let Some(record) = self.model.subsection_mut(subsection) {
                    record.lines.push(trimmed.to_string());
                }
                Ok(())
            }
        }
    }

    fn finish(self) -> Result<Model, StructuralError> {
        if self.section_tags % 2 != 0 {
            return Err(StructuralError::new(
                ErrorCode::E0103,
                "unbalanced Section/EndSection tags",
            )
            .with_hint("a section is missing its EndSection"));
        }
        if self.subsection_tags % 2 != 0 {
            return Err(StructuralError::new(
                ErrorCode::E0103,
                "unbalanced SubSection/EndSubSection tags",
            )
            .with_hint("a subsection is missing its EndSubSection"));
        }

        debug!(
            sections = self.section_tags / 2,
            subsections = self.subsection_tags / 2,
            free_comments = self.model.free_comments().len(),
            "parsed xorg.conf structure"
        );
        Ok(self.model)
    }
}
