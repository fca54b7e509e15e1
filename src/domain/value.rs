//! Tag value union - single strings and string sequences

use thiserror::Error;

/// A tag value that is either a single string or an ordered sequence of
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// A single content string
    Single(String),
    /// Multiple content strings, joined with a single space when stored
    Many(Vec<String>),
}

impl TagValue {
    /// Collapse the value into one string.
    ///
    /// `Many` values are joined with a single space; `Single` values pass
    /// through unchanged.
    pub fn into_joined(self) -> String {
        match self {
            TagValue::Single(value) => value,
            TagValue::Many(values) => values.join(" "),
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Single(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Single(value)
    }
}

impl From<Vec<String>> for TagValue {
    fn from(values: Vec<String>) -> Self {
        TagValue::Many(values)
    }
}

impl From<Vec<&str>> for TagValue {
    fn from(values: Vec<&str>) -> Self {
        TagValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Reasons an append can be refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppendError {
    /// A tag name must address exactly one map entry, so a sequence is not
    /// usable as a name.
    #[error("Tag name must be a single string, not a list")]
    NameIsList,
}
