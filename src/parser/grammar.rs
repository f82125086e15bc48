//! Per-section grammar rules.
//!
//! Which keywords of a section name another section, how such a reference is
//! written, and which sections skip the option syntax check. Everything the
//! tokenizer used to special-case by section name lives in [`SECTION_RULES`].

use super::lexer::{Token, tokenize, tokenize_with_empty};
use crate::base::SectionType;
use crate::base::constants::{OPTION, TRUE_VALUE, WHITELISTED_LINES};
use std::fmt;

/// How the referenced identifier is located on a reference line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceForm {
    /// `Keyword "id"` or the legacy `Keyword 0`
    Plain,
    /// The first quoted token names the target; other tokens are attributes
    /// (`Screen 0 "Screen0" 0 0`, `InputDevice "Mouse0" "CorePointer"`)
    FirstQuoted,
}

/// A keyword that references another section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRule {
    pub keyword: &'static str,
    pub target: SectionType,
}

/// Grammar of one section type
#[derive(Debug, Clone, Copy)]
pub struct SectionRules {
    pub section: SectionType,
    pub references: &'static [ReferenceRule],
    pub reference_form: ReferenceForm,
    /// Lines of this section are not subject to the option syntax check
    pub syntax_exempt: bool,
}

impl SectionRules {
    /// The reference rule for `keyword`, if it is a reference keyword here
    pub fn reference_rule(&self, keyword: &str) -> Option<&'static ReferenceRule> {
        self.references
            .iter()
            .find(|rule| rule.keyword.eq_ignore_ascii_case(keyword))
    }
}

const fn rules(section: SectionType) -> SectionRules {
    SectionRules {
        section,
        references: &[],
        reference_form: ReferenceForm::Plain,
        syntax_exempt: false,
    }
}

pub static SECTION_RULES: &[SectionRules] = &[
    SectionRules {
        references: &[
            ReferenceRule {
                keyword: "Screen",
                target: SectionType::Screen,
            },
            ReferenceRule {
                keyword: "InputDevice",
                target: SectionType::InputDevice,
            },
        ],
        reference_form: ReferenceForm::FirstQuoted,
        ..rules(SectionType::ServerLayout)
    },
    SectionRules {
        references: &[
            ReferenceRule {
                keyword: "Device",
                target: SectionType::Device,
            },
            ReferenceRule {
                keyword: "Monitor",
                target: SectionType::Monitor,
            },
        ],
        ..rules(SectionType::Screen)
    },
    SectionRules {
        references: &[ReferenceRule {
            keyword: "Screen",
            target: SectionType::Screen,
        }],
        ..rules(SectionType::Device)
    },
    SectionRules {
        syntax_exempt: true,
        ..rules(SectionType::Files)
    },
    SectionRules {
        syntax_exempt: true,
        ..rules(SectionType::Comments)
    },
];

/// Grammar rules for a section type
pub fn section_rules(section: SectionType) -> SectionRules {
    SECTION_RULES
        .iter()
        .find(|r| r.section == section)
        .copied()
        .unwrap_or(rules(section))
}

/// Target of a reference, resolved against the registry at lookup time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Reference {
    ByIdentifier(String),
    ByPosition(usize),
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByIdentifier(id) => f.write_str(id),
            Self::ByPosition(pos) => write!(f, "{pos}"),
        }
    }
}

/// One option or keyword line, split into name and values
///
/// Both `Option "Name" values...` and `Name values...` are recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine {
    pub name: String,
    /// Written with the `Option` prefix
    pub is_option: bool,
    pub values: Vec<Token>,
}

impl OptionLine {
    /// Classify a raw line; `None` for blank lines and a bare `Option`
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = tokenize(line).into_iter();
        let first = tokens.next()?;
        if first.as_str().eq_ignore_ascii_case(OPTION) {
            let name = tokens.next()?;
            Some(Self {
                name: name.text.to_string(),
                is_option: true,
                values: tokens.collect(),
            })
        } else {
            Some(Self {
                name: first.text.to_string(),
                is_option: false,
                values: tokens.collect(),
            })
        }
    }

    pub fn matches(&self, option: &str) -> bool {
        self.name.eq_ignore_ascii_case(option)
    }

    /// The value as text: values joined by a space, `True` when there is none
    pub fn value(&self) -> String {
        if self.values.is_empty() {
            return TRUE_VALUE.to_string();
        }
        self.values
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The reference this line makes within `section`, if any
    ///
    /// Only keyword lines reference; `Option "Screen" ...` never does.
    pub fn reference(&self, section: SectionType) -> Option<(SectionType, Reference)> {
        if self.is_option {
            return None;
        }
        let grammar = section_rules(section);
        let rule = grammar.reference_rule(&self.name)?;

        if grammar.reference_form == ReferenceForm::FirstQuoted {
            if let Some(token) = self.values.iter().find(|t| t.quoted) {
                return Some((rule.target, Reference::ByIdentifier(token.text.to_string())));
            }
        }

        match self.values.as_slice() {
            [] => None,
            [single] if !single.quoted => match single.as_str().parse::<usize>() {
                Ok(position) => Some((rule.target, Reference::ByPosition(position))),
                Err(_) => Some((rule.target, Reference::ByIdentifier(single.text.to_string()))),
            },
            [first, ..] => Some((rule.target, Reference::ByIdentifier(first.text.to_string()))),
        }
    }
}

/// Check a line against the option syntax rule.
///
/// A line needs at least two tokens (a trailing `""` counts) and a keyword
/// starting with an alphabetic character, unless it is whitelisted.
pub fn is_well_formed(line: &str) -> bool {
    let tokens = tokenize_with_empty(line);
    match tokens.as_slice() {
        [] => true,
        [only] => WHITELISTED_LINES
            .iter()
            .any(|w| w.eq_ignore_ascii_case(only.as_str())),
        [first, ..] => first.as_str().chars().next().is_some_and(char::is_alphabetic),
    }
}
