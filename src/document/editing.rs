//! Mutators.
//!
//! Every mutator takes an optional position: `Some` addresses one section
//! and fails with `SectionNotFound` if it does not exist, `None` addresses
//! every section of the type. Mutators return how many lines or sections
//! they touched and leave the registry rebuilt.
//!
//! An edit that would leave a section without exactly one `Identifier`,
//! repeat an identifier within a type, or write a malformed line fails
//! with `XorgError::Structural` and changes nothing. References may break:
//! removing a section leaves the lines that named it in place.

use tracing::debug;

use super::{OptionStyle, XorgConfig};
use crate::base::SectionType;
use crate::base::constants::{END_SECTION, END_SUBSECTION, IDENTIFIER, SECTION, SUBSECTION};
use crate::hir::identifiers_in;
use crate::parser::{ErrorCode, OptionLine, Result, StructuralError, XorgError};
use crate::syntax::{CommentOwner, CommentRecord, Handle};

/// Replace the first line matching `matches` with `line` and drop the other
/// matches; append when nothing matches
fn replace_or_push(lines: &mut Vec<String>, line: String, matches: impl Fn(&OptionLine) -> bool) {
    let hits: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| OptionLine::parse(l).is_some_and(|l| matches(&l)))
        .map(|(i, _)| i)
        .collect();
    let Some((&first, rest)) = hits.split_first() else {
        lines.push(line);
        return;
    };
    for &i in rest.iter().rev() {
        lines.remove(i);
    }
    lines[first] = line;
}

/// Whether a value filter accepts a line: the whole value or its first
/// token, case-insensitively
fn value_matches(line: &OptionLine, value: &str) -> bool {
    line.value().eq_ignore_ascii_case(value)
        || line.values.first().is_some_and(|t| t.text.eq_ignore_ascii_case(value))
}

fn option_matches(raw: &str, option: &str, value: Option<&str>) -> bool {
    OptionLine::parse(raw)
        .is_some_and(|l| l.matches(option) && value.is_none_or(|v| value_matches(&l, v)))
}

impl XorgConfig {
    // ── Addressing ──────────────────────────────────────────────────

    /// Positions addressed by an optional position
    fn positions(&self, section: SectionType, position: Option<usize>) -> Result<Vec<usize>> {
        let count = self.model.count(section);
        match position {
            Some(position) if position < count => Ok(vec![position]),
            Some(position) => Err(XorgError::SectionNotFound { section, position }),
            None => Ok((0..count).collect()),
        }
    }

    fn handles(&self, section: SectionType, position: Option<usize>) -> Result<Vec<Handle>> {
        Ok(self
            .positions(section, position)?
            .into_iter()
            .filter_map(|p| self.model.handle_at(section, p))
            .collect())
    }

    /// Position of the section whose `Identifier` is `identifier`, for any
    /// section type
    fn find_identified(&self, section: SectionType, identifier: &str) -> Option<usize> {
        self.model.instances(section).iter().position(|instance| {
            identifiers_in(instance.lines().unwrap_or_default())
                .iter()
                .any(|id| id.eq_ignore_ascii_case(identifier))
        })
    }

    /// Sections addressed by identifier and/or position. With both, the
    /// identifier must be at that position.
    fn select(&self, section: SectionType, identifier: Option<&str>, position: Option<usize>) -> Result<Vec<Handle>> {
        let position = match identifier {
            Some(identifier) => {
                let found = self
                    .find_identified(section, identifier)
                    .ok_or_else(|| XorgError::identifier_not_found(section, identifier))?;
                if position.is_some_and(|p| p != found) {
                    return Err(XorgError::identifier_not_found(section, identifier));
                }
                Some(found)
            }
            None => position,
        };
        self.handles(section, position)
    }

    /// Whether a keyword line references `identifier`
    fn references(&self, section: SectionType, line: &OptionLine, identifier: &str) -> bool {
        match line.reference(section) {
            Some((target, reference)) => self
                .registry
                .resolve(target, &reference)
                .is_some_and(|id| id.eq_ignore_ascii_case(identifier)),
            None => line.values.first().is_some_and(|t| t.text.eq_ignore_ascii_case(identifier)),
        }
    }

    // ── Options ─────────────────────────────────────────────────────

    /// Set `option` to `value`, replacing existing lines of the same name
    /// and style. An empty value with [`OptionStyle::Option`] writes a
    /// boolean `Option "Name"`.
    pub fn add_option(
        &mut self,
        section: SectionType,
        option: &str,
        value: &str,
        style: OptionStyle,
        position: Option<usize>,
    ) -> Result<usize> {
        let positions = self.positions(section, position)?;
        let is_option = style == OptionStyle::Option;
        self.edit(|model| {
            for &p in &positions {
                if let Some(lines) = model.lines_mut(section, p) {
                    replace_or_push(lines, style.line(option, value), |l| {
                        l.is_option == is_option && l.matches(option)
                    });
                }
            }
        })?;
        debug!(%section, option, value, sections = positions.len(), "added option");
        Ok(positions.len())
    }

    /// Remove lines setting `option`, optionally only those with `value`
    pub fn remove_option(
        &mut self,
        section: SectionType,
        option: &str,
        value: Option<&str>,
        position: Option<usize>,
    ) -> Result<usize> {
        let positions = self.positions(section, position)?;
        let removed = self.edit(|model| {
            let mut removed = 0;
            for p in positions {
                if let Some(lines) = model.lines_mut(section, p) {
                    let before = lines.len();
                    lines.retain(|l| !option_matches(l, option, value));
                    removed += before - lines.len();
                }
            }
            removed
        })?;
        debug!(%section, option, removed, "removed option");
        Ok(removed)
    }

    /// Move lines setting `option` into the section's comments, `#`-prefixed
    pub fn comment_out_option(
        &mut self,
        section: SectionType,
        option: &str,
        value: Option<&str>,
        position: Option<usize>,
    ) -> Result<usize> {
        let handles = self.handles(section, position)?;
        let commented = self.edit(|model| {
            let mut commented = 0;
            for handle in handles {
                let Some(lines) = model.lines_of_mut(section, handle) else {
                    continue;
                };
                let (taken, kept): (Vec<String>, Vec<String>) =
                    lines.drain(..).partition(|l| option_matches(l, option, value));
                *lines = kept;
                commented += taken.len();
                for line in taken {
                    model.push_comment(section, CommentOwner::Section(handle), format!("#{line}"));
                }
            }
            commented
        })?;
        debug!(%section, option, commented, "commented out option");
        Ok(commented)
    }

    // ── References ──────────────────────────────────────────────────

    /// Add a `Keyword "identifier"` reference line unless the section
    /// already references `identifier` through `keyword`
    pub fn add_reference(
        &mut self,
        section: SectionType,
        keyword: &str,
        identifier: &str,
        position: Option<usize>,
    ) -> Result<usize> {
        let missing: Vec<usize> = self
            .positions(section, position)?
            .into_iter()
            .filter(|&p| {
                !self.model.lines(section, p).unwrap_or_default().iter().any(|raw| {
                    OptionLine::parse(raw).is_some_and(|l| {
                        !l.is_option && l.matches(keyword) && self.references(section, &l, identifier)
                    })
                })
            })
            .collect();

        let line = OptionStyle::Keyword.line(keyword, identifier);
        self.edit(|model| {
            for &p in &missing {
                if let Some(lines) = model.lines_mut(section, p) {
                    lines.push(line.clone());
                }
            }
        })?;
        debug!(%section, keyword, identifier, added = missing.len(), "added reference");
        Ok(missing.len())
    }

    /// Remove `keyword` lines that reference `identifier`, whether by name
    /// or by position
    pub fn remove_reference(
        &mut self,
        section: SectionType,
        keyword: &str,
        identifier: &str,
        position: Option<usize>,
    ) -> Result<usize> {
        let doomed: Vec<(usize, Vec<usize>)> = self
            .positions(section, position)?
            .into_iter()
            .map(|p| {
                let indices = self
                    .model
                    .lines(section, p)
                    .unwrap_or_default()
                    .iter()
                    .enumerate()
                    .filter(|(_, raw)| {
                        OptionLine::parse(raw).is_some_and(|l| {
                            !l.is_option && l.matches(keyword) && self.references(section, &l, identifier)
                        })
                    })
                    .map(|(i, _)| i)
                    .collect();
                (p, indices)
            })
            .collect();

        let removed = self.edit(|model| {
            let mut removed = 0;
            for (p, indices) in doomed {
                if let Some(lines) = model.lines_mut(section, p) {
                    for &i in indices.iter().rev() {
                        lines.remove(i);
                        removed += 1;
                    }
                }
            }
            removed
        })?;
        debug!(%section, keyword, identifier, removed, "removed reference");
        Ok(removed)
    }

    // ── Sections ────────────────────────────────────────────────────

    /// Append a new section and return its position.
    ///
    /// When a section of the type already carries `identifier`, nothing is
    /// added and its position is returned.
    ///
    /// # Errors
    ///
    /// `XorgError::Structural` for a pseudo-type, or when a type that needs
    /// an identifier gets none.
    pub fn make_section(&mut self, section: SectionType, identifier: Option<&str>) -> Result<usize> {
        if section.is_pseudo() {
            return Err(StructuralError::new(
                ErrorCode::E0101,
                format!("{section} is not a section type"),
            )
            .into());
        }
        match identifier {
            Some(identifier) => {
                if let Some(existing) = self.find_identified(section, identifier) {
                    debug!(%section, identifier, position = existing, "section already exists");
                    return Ok(existing);
                }
            }
            None if section.requires_identifier() => {
                return Err(StructuralError::new(
                    ErrorCode::E0201,
                    format!("a {section} section needs an identifier"),
                )
                .into());
            }
            None => {}
        }

        let lines = identifier
            .map(|id| vec![OptionStyle::Keyword.line(IDENTIFIER, id)])
            .unwrap_or_default();
        self.edit(|model| model.push_section(section, lines))?;
        let position = self.model.count(section) - 1;
        debug!(%section, ?identifier, position, "made section");
        Ok(position)
    }

    /// Remove sections by identifier, by position, or all of a type, with
    /// their subsections and comments
    pub fn remove_section(
        &mut self,
        section: SectionType,
        identifier: Option<&str>,
        position: Option<usize>,
    ) -> Result<usize> {
        let handles = self.select(section, identifier, position)?;
        let removed = self.edit(|model| {
            handles.into_iter().filter(|&h| model.remove_section(section, h)).count()
        })?;
        debug!(%section, ?identifier, removed, "removed section");
        Ok(removed)
    }

    /// Replace sections with `#`-prefixed copies of their text, written
    /// after the live sections of the type
    pub fn comment_out_section(
        &mut self,
        section: SectionType,
        identifier: Option<&str>,
        position: Option<usize>,
    ) -> Result<usize> {
        let handles = self.select(section, identifier, position)?;
        let records: Vec<(Handle, Vec<String>)> = handles
            .into_iter()
            .map(|h| (h, self.commented_section(section, h)))
            .collect();

        self.edit(|model| {
            for (handle, lines) in &records {
                model.remove_section(section, *handle);
                model.push_comment_record(CommentRecord {
                    owner_type: section,
                    owner: CommentOwner::Detached,
                    lines: lines.clone(),
                });
            }
        })?;
        debug!(%section, ?identifier, commented = records.len(), "commented out section");
        Ok(records.len())
    }

    fn commented_section(&self, section: SectionType, handle: Handle) -> Vec<String> {
        let model = &self.model;
        let mut out = vec![format!("#{SECTION} \"{section}\"")];
        let lines = model
            .position_of(section, handle)
            .and_then(|p| model.lines(section, p))
            .unwrap_or_default();
        out.extend(lines.iter().map(|l| format!("#\t{l}")));
        for (sub, record) in model.subsections_of(handle) {
            out.push(format!("#\t{SUBSECTION} \"{}\"", record.name));
            out.extend(record.lines.iter().map(|l| format!("#\t\t{l}")));
            out.extend(
                model
                    .comments_for(CommentOwner::SubSection(sub))
                    .iter()
                    .map(|c| format!("#\t\t{c}")),
            );
            out.push(format!("#\t{END_SUBSECTION}"));
        }
        out.extend(
            model
                .comments_for(CommentOwner::Section(handle))
                .iter()
                .map(|c| format!("#\t{c}")),
        );
        out.push(format!("#{END_SECTION}"));
        out
    }

    // ── Subsections ─────────────────────────────────────────────────

    /// Subsections named `name` owned by the addressed sections
    fn subsection_handles(&self, section: SectionType, name: &str, position: Option<usize>) -> Result<Vec<(Handle, Handle)>> {
        Ok(self
            .handles(section, position)?
            .into_iter()
            .flat_map(|owner| {
                self.model
                    .subsections_of(owner)
                    .filter(|(_, r)| r.name.eq_ignore_ascii_case(name))
                    .map(move |(h, _)| (owner, h))
                    .collect::<Vec<_>>()
            })
            .collect())
    }

    /// Open an empty `SubSection "name"` in each addressed section that
    /// does not already have one
    pub fn make_subsection(&mut self, section: SectionType, name: &str, position: Option<usize>) -> Result<usize> {
        let owners: Vec<Handle> = self
            .handles(section, position)?
            .into_iter()
            .filter(|&owner| self.model.find_subsection(owner, name).is_none())
            .collect();
        self.edit(|model| {
            for &owner in &owners {
                model.push_subsection(section, owner, name, Vec::new());
            }
        })?;
        debug!(%section, name, made = owners.len(), "made subsection");
        Ok(owners.len())
    }

    pub fn remove_subsection(&mut self, section: SectionType, name: &str, position: Option<usize>) -> Result<usize> {
        let targets = self.subsection_handles(section, name, position)?;
        let removed = self.edit(|model| {
            targets.into_iter().filter(|&(_, h)| model.remove_subsection(h)).count()
        })?;
        debug!(%section, name, removed, "removed subsection");
        Ok(removed)
    }

    /// Set an option inside the named subsections, replacing lines of the
    /// same name and style
    pub fn add_suboption(
        &mut self,
        section: SectionType,
        subsection: &str,
        option: &str,
        value: &str,
        style: OptionStyle,
        position: Option<usize>,
    ) -> Result<usize> {
        let targets = self.subsection_handles(section, subsection, position)?;
        let is_option = style == OptionStyle::Option;
        self.edit(|model| {
            for &(_, handle) in &targets {
                if let Some(record) = model.subsection_mut(handle) {
                    replace_or_push(&mut record.lines, style.line(option, value), |l| {
                        l.is_option == is_option && l.matches(option)
                    });
                }
            }
        })?;
        debug!(%section, subsection, option, value, subsections = targets.len(), "added suboption");
        Ok(targets.len())
    }

    pub fn remove_suboption(
        &mut self,
        section: SectionType,
        subsection: &str,
        option: &str,
        position: Option<usize>,
    ) -> Result<usize> {
        let targets = self.subsection_handles(section, subsection, position)?;
        let removed = self.edit(|model| {
            let mut removed = 0;
            for (_, handle) in targets {
                if let Some(record) = model.subsection_mut(handle) {
                    let before = record.lines.len();
                    record.lines.retain(|l| !option_matches(l, option, None));
                    removed += before - record.lines.len();
                }
            }
            removed
        })?;
        debug!(%section, subsection, option, removed, "removed suboption");
        Ok(removed)
    }

    /// Move subsections into their section's comments as `#`-prefixed text
    pub fn comment_out_subsection(&mut self, section: SectionType, name: &str, position: Option<usize>) -> Result<usize> {
        let targets: Vec<(Handle, Handle, Vec<String>)> = self
            .subsection_handles(section, name, position)?
            .into_iter()
            .filter_map(|(owner, handle)| {
                let record = self.model.subsection(handle)?;
                let mut lines = vec![format!("#{SUBSECTION} \"{}\"", record.name)];
                lines.extend(record.lines.iter().map(|l| format!("#\t{l}")));
                lines.extend(
                    self.model
                        .comments_for(CommentOwner::SubSection(handle))
                        .iter()
                        .map(|c| format!("#\t{c}")),
                );
                lines.push(format!("#{END_SUBSECTION}"));
                Some((owner, handle, lines))
            })
            .collect();

        self.edit(|model| {
            for (owner, handle, lines) in &targets {
                model.remove_subsection(*handle);
                for line in lines {
                    model.push_comment(section, CommentOwner::Section(*owner), line.as_str());
                }
            }
        })?;
        debug!(%section, name, commented = targets.len(), "commented out subsection");
        Ok(targets.len())
    }
}
