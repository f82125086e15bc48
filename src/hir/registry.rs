//! Identifier registry.
//!
//! For every section type that requires an `Identifier`, the ordered
//! (identifier, position) pairs of its instances. The registry is derived
//! from the model and rebuilt after every structural edit, so positions in
//! it always match the model's current order.

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::SectionType;
use crate::base::constants::IDENTIFIER;
use crate::parser::{ErrorCode, OptionLine, Reference, StructuralError};
use crate::syntax::Model;

/// One registered identifier
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct RegistryEntry {
    pub identifier: SmolStr,
    pub position: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct IdentifierRegistry {
    entries: IndexMap<SectionType, Vec<RegistryEntry>>,
}

/// Values of every `Identifier` line among `lines`, in order
///
/// `Identifier ""` contributes an empty identifier.
pub fn identifiers_in(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| OptionLine::parse(line))
        .filter(|line| !line.is_option && line.matches(IDENTIFIER))
        .map(|line| {
            line.values
                .first()
                .map(|t| t.text.to_string())
                .unwrap_or_default()
        })
        .collect()
}

impl IdentifierRegistry {
    /// Build the registry, rejecting sections without exactly one `Identifier`.
    ///
    /// # Errors
    ///
    /// `E0201` when a section lacks an identifier, `E0202` when it has more
    /// than one `Identifier` line.
    pub fn build(model: &Model) -> Result<Self, StructuralError> {
        let mut registry = Self::default();
        for section in SectionType::REQUIRES_IDENTIFIER {
            let entries = registry.entries.entry(section).or_default();
            for (position, instance) in model.instances(section).iter().enumerate() {
                let lines = instance.lines().unwrap_or_default();
                let mut found = identifiers_in(lines);
                if found.len() > 1 {
                    return Err(StructuralError::new(
                        ErrorCode::E0202,
                        format!("{section} section at position {position} has {} Identifier lines", found.len()),
                    ));
                }
                let identifier = found.pop().ok_or_else(|| {
                    StructuralError::new(
                        ErrorCode::E0201,
                        format!("{section} section at position {position} has no Identifier"),
                    )
                    .with_hint("add an Identifier line to the section")
                })?;
                entries.push(RegistryEntry {
                    identifier: identifier.into(),
                    position,
                });
            }
        }
        trace!(types = registry.entries.len(), "built identifier registry");
        Ok(registry)
    }

    /// Build the registry without rejecting anything: sections without an identifier are
    /// skipped and only the first of several `Identifier` lines counts.
    pub fn build_lenient(model: &Model) -> Self {
        let mut registry = Self::default();
        for section in SectionType::REQUIRES_IDENTIFIER {
            let entries = registry.entries.entry(section).or_default();
            for (position, instance) in model.instances(section).iter().enumerate() {
                let lines = instance.lines().unwrap_or_default();
                if let Some(identifier) = identifiers_in(lines).into_iter().next() {
                    entries.push(RegistryEntry {
                        identifier: identifier.into(),
                        position,
                    });
                }
            }
        }
        registry
    }

    pub fn entries(&self, section: SectionType) -> &[RegistryEntry] {
        self.entries.get(&section).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self, section: SectionType) -> usize {
        self.entries(section).len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Position of the section carrying `identifier` (case-insensitive)
    pub fn position_of(&self, section: SectionType, identifier: &str) -> Option<usize> {
        self.entries(section)
            .iter()
            .find(|e| e.identifier.eq_ignore_ascii_case(identifier))
            .map(|e| e.position)
    }

    pub fn identifier_at(&self, section: SectionType, position: usize) -> Option<&str> {
        self.entries(section)
            .iter()
            .find(|e| e.position == position)
            .map(|e| e.identifier.as_str())
    }

    pub fn contains(&self, section: SectionType, identifier: &str) -> bool {
        self.position_of(section, identifier).is_some()
    }

    /// Resolve a reference to the identifier it names.
    ///
    /// Identifier references resolve to themselves whether or not the target
    /// exists; positional references resolve only when the position exists.
    pub fn resolve<'a>(&'a self, section: SectionType, reference: &'a Reference) -> Option<&'a str> {
        match reference {
            Reference::ByIdentifier(identifier) => Some(identifier.as_str()),
            Reference::ByPosition(position) => self.identifier_at(section, *position),
        }
    }
}
