//! Diagnostics: the semantic rules run after the structural parse.
//!
//! Rules run in a fixed order and the first violation is returned:
//!
//! 1. duplicate identifiers (`E0203`)
//! 2. option syntax (`E0301`)
//! 3. broken references (`E0401`, only with `check_references`)
//! 4. identifier completeness (`E0204`)
//! 5. every ServerLayout references a Screen (`E0501`)
//! 6. DefaultServerLayout is unique and resolvable (`E0502`, `E0503`)

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::base::SectionType;
use crate::base::constants::DEFAULT_SERVER_LAYOUT;
use crate::parser::grammar::is_well_formed;
use crate::parser::{ErrorCode, OptionLine, ParseOptions, StructuralError, section_rules};
use crate::syntax::Model;

use super::registry::IdentifierRegistry;

/// Per-type references keyed by target type, deduplicated in encounter order
pub type ReferenceMap = IndexMap<SectionType, IndexSet<String>>;

// ============================================================================
// QUERIES
// ============================================================================

/// Identifiers registered more than once per type, compared
/// case-insensitively, with the spelling first seen and the count
pub fn duplicate_identifiers(registry: &IdentifierRegistry) -> IndexMap<SectionType, IndexMap<String, usize>> {
    let mut duplicates = IndexMap::new();
    for section in SectionType::REQUIRES_IDENTIFIER {
        let mut seen: IndexMap<String, (String, usize)> = IndexMap::new();
        for entry in registry.entries(section) {
            seen.entry(entry.identifier.to_lowercase())
                .or_insert_with(|| (entry.identifier.to_string(), 0))
                .1 += 1;
        }
        let repeated: IndexMap<String, usize> = seen
            .into_values()
            .filter(|(_, count)| *count > 1)
            .collect();
        if !repeated.is_empty() {
            duplicates.insert(section, repeated);
        }
    }
    duplicates
}

/// Options appearing more than once among the lines of a `section`, counted
/// case-insensitively; reference lines are not options and never count
pub fn duplicate_options(section: SectionType, lines: &[String]) -> IndexMap<String, usize> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut order: Vec<String> = Vec::new();
    let options = lines
        .iter()
        .filter_map(|l| OptionLine::parse(l))
        .filter(|l| l.reference(section).is_none());
    for line in options {
        let key = line.name.to_lowercase();
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|name| {
            let count = counts.get(&name).copied().unwrap_or(0);
            (count > 1).then_some((name, count))
        })
        .collect()
}

/// References made by the section at `position`, resolved to identifiers.
///
/// Positional references that point past the end of the target type are
/// dropped. `targets` restricts the result to the given target types.
pub fn references_of(
    model: &Model,
    registry: &IdentifierRegistry,
    section: SectionType,
    position: usize,
    targets: Option<&[SectionType]>,
) -> ReferenceMap {
    let mut references = ReferenceMap::new();
    let Some(lines) = model.lines(section, position) else {
        return references;
    };
    for line in lines.iter().filter_map(|l| OptionLine::parse(l)) {
        let Some((target, reference)) = line.reference(section) else {
            continue;
        };
        if targets.is_some_and(|t| !t.contains(&target)) {
            continue;
        }
        if let Some(identifier) = registry.resolve(target, &reference) {
            references
                .entry(target)
                .or_default()
                .insert(identifier.to_string());
        }
    }
    references
}

/// Identifier references whose target does not exist, keyed by target type
pub fn broken_references(model: &Model, registry: &IdentifierRegistry) -> ReferenceMap {
    let mut broken = ReferenceMap::new();
    for section in SectionType::REQUIRES_IDENTIFIER {
        for position in 0..model.count(section) {
            for (target, identifiers) in references_of(model, registry, section, position, None) {
                for identifier in identifiers {
                    if !registry.contains(target, &identifier) {
                        broken.entry(target).or_default().insert(identifier);
                    }
                }
            }
        }
    }
    broken
}

/// The DefaultServerLayout set in ServerFlags, if any
///
/// # Errors
///
/// `E0502` when more than one line sets it, `E0503` when it names a
/// ServerLayout that does not exist.
pub fn default_server_layout(
    model: &Model,
    registry: &IdentifierRegistry,
) -> Result<Option<String>, StructuralError> {
    let mut found: Vec<String> = model
        .instances(SectionType::ServerFlags)
        .iter()
        .filter_map(|instance| instance.lines())
        .flatten()
        .filter_map(|line| OptionLine::parse(line))
        .filter(|line| line.matches(DEFAULT_SERVER_LAYOUT))
        .filter_map(|line| line.values.first().map(|t| t.text.to_string()))
        .collect();

    if found.len() > 1 {
        return Err(StructuralError::new(
            ErrorCode::E0502,
            format!("DefaultServerLayout is set {} times in ServerFlags", found.len()),
        ));
    }
    let Some(layout) = found.pop() else {
        return Ok(None);
    };
    if !registry.contains(SectionType::ServerLayout, &layout) {
        return Err(StructuralError::new(
            ErrorCode::E0503,
            format!("DefaultServerLayout \"{layout}\" names no ServerLayout"),
        )
        .with_hint("define the ServerLayout or remove the DefaultServerLayout option"));
    }
    Ok(Some(layout))
}

// ============================================================================
// RULES
// ============================================================================

fn check_duplicates(registry: &IdentifierRegistry) -> Result<(), StructuralError> {
    let duplicates = duplicate_identifiers(registry);
    let Some((section, names)) = duplicates.first() else {
        return Ok(());
    };
    let listed = names
        .iter()
        .map(|(name, count)| format!("\"{name}\" ({count} times)"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(StructuralError::new(
        ErrorCode::E0203,
        format!("duplicate {section} identifiers: {listed}"),
    ))
}

/// Lines failing the option syntax check: owning type (`SubSection` for
/// subsection lines), where they sit, and the line itself
fn malformed_lines(model: &Model) -> Vec<(SectionType, String, &str)> {
    let mut found = Vec::new();
    for section in model.section_types() {
        if section_rules(section).syntax_exempt {
            continue;
        }
        for (position, instance) in model.instances(section).iter().enumerate() {
            let lines = instance.lines().unwrap_or_default();
            found.extend(
                lines
                    .iter()
                    .filter(|l| !is_well_formed(l))
                    .map(|l| (section, format!("{section} section at position {position}"), l.as_str())),
            );
        }
    }
    for (_, record) in model.subsections() {
        found.extend(
            record
                .lines
                .iter()
                .filter(|l| !is_well_formed(l))
                .map(|l| (SectionType::SubSection, format!("SubSection \"{}\"", record.name), l.as_str())),
        );
    }
    found
}

fn malformed(location: &str, line: &str) -> StructuralError {
    StructuralError::new(ErrorCode::E0301, format!("malformed line in {location}: {line:?}"))
}

fn check_option_syntax(model: &Model) -> Result<(), StructuralError> {
    match malformed_lines(model).first() {
        Some((_, location, line)) => Err(malformed(location, line)),
        None => Ok(()),
    }
}

fn check_references(model: &Model, registry: &IdentifierRegistry) -> Result<(), StructuralError> {
    let broken = broken_references(model, registry);
    let Some((target, identifiers)) = broken.first() else {
        return Ok(());
    };
    let listed = identifiers
        .iter()
        .map(|id| format!("\"{id}\""))
        .collect::<Vec<_>>()
        .join(", ");
    Err(StructuralError::new(
        ErrorCode::E0401,
        format!("references to missing {target} sections: {listed}"),
    )
    .with_hint("parse leniently and call fix_broken_references to create them"))
}

fn check_completeness(model: &Model, registry: &IdentifierRegistry) -> Result<(), StructuralError> {
    for section in SectionType::REQUIRES_IDENTIFIER {
        let (sections, identifiers) = (model.count(section), registry.len(section));
        if sections != identifiers {
            return Err(StructuralError::new(
                ErrorCode::E0204,
                format!("{sections} {section} sections but {identifiers} identifiers"),
            ));
        }
    }
    Ok(())
}

fn check_layout_screens(model: &Model) -> Result<(), StructuralError> {
    for (position, instance) in model.instances(SectionType::ServerLayout).iter().enumerate() {
        let references_screen = instance
            .lines()
            .unwrap_or_default()
            .iter()
            .filter_map(|l| OptionLine::parse(l))
            .filter_map(|l| l.reference(SectionType::ServerLayout))
            .any(|(target, _)| target == SectionType::Screen);
        if !references_screen {
            return Err(StructuralError::new(
                ErrorCode::E0501,
                format!("ServerLayout at position {position} references no Screen"),
            ));
        }
    }
    Ok(())
}

/// Check an edited model against the invariants every edit must keep and
/// return its registry.
///
/// Each section that needs an identifier still has exactly one, and the
/// edit introduces no duplicate identifier and no malformed line. Violations
/// `before` already had are tolerated. References and layout rules are not
/// checked here.
///
/// # Errors
///
/// `E0201`/`E0202` from the registry build, `E0203` for a new duplicate
/// identifier, `E0301` for a new malformed line.
pub fn check_edit(before: &Model, after: &Model) -> Result<IdentifierRegistry, StructuralError> {
    let registry = IdentifierRegistry::build(after)?;

    let existing = duplicate_identifiers(&IdentifierRegistry::build_lenient(before));
    for (section, names) in duplicate_identifiers(&registry) {
        for (name, count) in names {
            let had = existing
                .get(&section)
                .and_then(|names| names.iter().find(|(known, _)| known.eq_ignore_ascii_case(&name)))
                .map_or(0, |(_, count)| *count);
            if count > had {
                return Err(StructuralError::new(
                    ErrorCode::E0203,
                    format!("{section} identifier \"{name}\" is already in use"),
                ));
            }
        }
    }

    let mut known: FxHashMap<(SectionType, &str), usize> = FxHashMap::default();
    for (section, _, line) in malformed_lines(before) {
        *known.entry((section, line)).or_default() += 1;
    }
    for (section, location, line) in malformed_lines(after) {
        match known.get_mut(&(section, line)) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return Err(malformed(&location, line)),
        }
    }

    trace!("edit keeps document invariants");
    Ok(registry)
}

/// Run every semantic rule against a freshly parsed model
pub fn validate(
    model: &Model,
    registry: &IdentifierRegistry,
    options: &ParseOptions,
) -> Result<(), StructuralError> {
    check_duplicates(registry)?;
    check_option_syntax(model)?;
    if options.check_references {
        check_references(model, registry)?;
    }
    check_completeness(model, registry)?;
    check_layout_screens(model)?;
    default_server_layout(model, registry)?;
    debug!(check_references = options.check_references, "validated model");
    Ok(())
}
