//! Read-only queries

use indexmap::IndexMap;

use super::{OptionValue, XorgConfig};
use crate::base::SectionType;
use crate::hir::{
    ReferenceMap, broken_references, default_server_layout, duplicate_identifiers,
    duplicate_options, references_of,
};
use crate::parser::{OptionLine, Reference, Result, XorgError};

impl XorgConfig {
    /// Lines of the section at `position`
    pub(super) fn section_lines(&self, section: SectionType, position: usize) -> Result<&[String]> {
        self.model
            .lines(section, position)
            .ok_or(XorgError::SectionNotFound { section, position })
    }

    /// Value of `option` in the section at `position`.
    ///
    /// Both `Option "Name" ...` and `Name ...` lines match. A line with no
    /// value yields `True`; several matching lines yield
    /// [`OptionValue::Multiple`].
    pub fn get_value(&self, section: SectionType, option: &str, position: usize) -> Result<OptionValue> {
        let lines = self.section_lines(section, position)?;
        let values = lines
            .iter()
            .filter_map(|l| OptionLine::parse(l))
            .filter(|l| l.matches(option))
            .map(|l| l.value())
            .collect();
        OptionValue::from_values(values).ok_or_else(|| XorgError::option_not_found(section, option, position))
    }

    /// Value of a reference keyword line, resolved to the target identifier.
    ///
    /// Only keyword lines count; `Option "Screen" ...` is not a reference.
    /// Positional references resolve through the registry and fall back to
    /// the number when the position does not exist.
    pub fn get_reference_value(&self, section: SectionType, keyword: &str, position: usize) -> Result<OptionValue> {
        let lines = self.section_lines(section, position)?;
        let values = lines
            .iter()
            .filter_map(|l| OptionLine::parse(l))
            .filter(|l| !l.is_option && l.matches(keyword))
            .map(|l| match l.reference(section) {
                Some((target, reference)) => match self.registry.resolve(target, &reference) {
                    Some(identifier) => identifier.to_string(),
                    None => reference.to_string(),
                },
                None => l.value(),
            })
            .collect();
        OptionValue::from_values(values).ok_or_else(|| XorgError::option_not_found(section, keyword, position))
    }

    /// Value of `option` inside the subsection `subsection` of a section
    pub fn get_subsection_value(
        &self,
        section: SectionType,
        subsection: &str,
        option: &str,
        position: usize,
    ) -> Result<OptionValue> {
        let owner = self
            .model
            .handle_at(section, position)
            .ok_or(XorgError::SectionNotFound { section, position })?;
        let values = self
            .model
            .subsections_of(owner)
            .filter(|(_, r)| r.name.eq_ignore_ascii_case(subsection))
            .flat_map(|(_, r)| r.lines.iter())
            .filter_map(|l| OptionLine::parse(l))
            .filter(|l| l.matches(option))
            .map(|l| l.value())
            .collect();
        OptionValue::from_values(values).ok_or_else(|| XorgError::option_not_found(SectionType::SubSection, option, position))
    }

    /// Position of the section with `identifier` (case-insensitive)
    pub fn get_position(&self, section: SectionType, identifier: &str) -> Result<usize> {
        self.registry
            .position_of(section, identifier)
            .ok_or_else(|| XorgError::identifier_not_found(section, identifier))
    }

    pub fn get_identifier(&self, section: SectionType, position: usize) -> Result<String> {
        self.registry
            .identifier_at(section, position)
            .map(str::to_string)
            .ok_or_else(|| XorgError::identifier_not_found(section, position))
    }

    /// Whether a section exists; with neither filter, whether any does.
    /// With both, the identifier must be at that position.
    pub fn is_section(&self, section: SectionType, identifier: Option<&str>, position: Option<usize>) -> bool {
        match (identifier, position) {
            (Some(identifier), Some(position)) => self.registry.position_of(section, identifier) == Some(position),
            (Some(identifier), None) => self.registry.contains(section, identifier),
            (None, Some(position)) => position < self.model.count(section),
            (None, None) => self.model.count(section) > 0,
        }
    }

    /// References made by a section, grouped by target type.
    /// `targets` restricts the result to the given target types.
    pub fn get_references(
        &self,
        section: SectionType,
        position: usize,
        targets: Option<&[SectionType]>,
    ) -> Result<ReferenceMap> {
        self.section_lines(section, position)?;
        Ok(references_of(&self.model, &self.registry, section, position, targets))
    }

    /// Raw reference of each matching keyword line, unresolved
    pub fn get_raw_references(&self, section: SectionType, position: usize) -> Result<Vec<(SectionType, Reference)>> {
        let lines = self.section_lines(section, position)?;
        Ok(lines
            .iter()
            .filter_map(|l| OptionLine::parse(l))
            .filter_map(|l| l.reference(section))
            .collect())
    }

    /// Options set more than once in one section, with their counts
    pub fn get_duplicate_options(&self, section: SectionType, position: usize) -> Result<IndexMap<String, usize>> {
        let lines = self.section_lines(section, position)?;
        Ok(duplicate_options(section, lines))
    }

    /// Duplicate options of every section, keyed by type then position
    pub fn check_duplicate_options(&self) -> IndexMap<SectionType, IndexMap<usize, IndexMap<String, usize>>> {
        let mut report = IndexMap::new();
        for section in self.model.section_types() {
            let per_position: IndexMap<usize, IndexMap<String, usize>> = self
                .model
                .instances(section)
                .iter()
                .enumerate()
                .filter_map(|(position, instance)| {
                    let duplicates = duplicate_options(section, instance.lines()?);
                    (!duplicates.is_empty()).then_some((position, duplicates))
                })
                .collect();
            if !per_position.is_empty() {
                report.insert(section, per_position);
            }
        }
        report
    }

    /// Identifiers used by more than one section of a type, with counts
    pub fn get_duplicate_identifiers(&self) -> IndexMap<SectionType, IndexMap<String, usize>> {
        duplicate_identifiers(&self.registry)
    }

    /// Referenced identifiers with no section behind them, by target type
    pub fn get_broken_references(&self) -> ReferenceMap {
        broken_references(&self.model, &self.registry)
    }

    /// The ServerFlags `DefaultServerLayout`, if set.
    ///
    /// # Errors
    ///
    /// `XorgError::Structural` when it is set more than once or names a
    /// ServerLayout that does not exist.
    pub fn get_default_server_layout(&self) -> Result<Option<String>> {
        Ok(default_server_layout(&self.model, &self.registry)?)
    }

    pub fn section_count(&self, section: SectionType) -> usize {
        self.model.count(section)
    }

    /// Names of the subsections of a section, in order
    pub fn subsection_names(&self, section: SectionType, position: usize) -> Result<Vec<String>> {
        let owner = self
            .model
            .handle_at(section, position)
            .ok_or(XorgError::SectionNotFound { section, position })?;
        Ok(self.model.subsections_of(owner).map(|(_, r)| r.name.clone()).collect())
    }
}
