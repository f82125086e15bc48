//! Option values and line styles

use std::fmt;

use crate::base::constants::OPTION;

/// Value of an option lookup
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum OptionValue {
    /// Exactly one matching line
    Single(String),
    /// One value per matching line, in line order
    Multiple(Vec<String>),
}

impl OptionValue {
    pub(crate) fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(Self::Single),
            _ => Some(Self::Multiple(values)),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// Every value, single or not
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// The first value
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }
}

impl PartialEq<&str> for OptionValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_single() == Some(*other)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().join(", "))
    }
}

/// How a new option line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionStyle {
    /// `Option "Name" "value"`
    #[default]
    Option,
    /// `Name "value"`
    Keyword,
}

impl OptionStyle {
    /// Render one line; an empty value writes the bare `Option "Name"` form
    pub fn line(self, name: &str, value: &str) -> String {
        match (self, value.is_empty()) {
            (Self::Option, true) => format!("{OPTION} \"{name}\""),
            (Self::Option, false) => format!("{OPTION} \"{name}\" \"{value}\""),
            (Self::Keyword, _) => format!("{name} \"{value}\""),
        }
    }
}
