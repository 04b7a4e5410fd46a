//! Error type shared by all fallible operations of the crate.

use std::fmt;

/// Error type for region computation, label formatting and legend validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VennError {
    /// Percentages were requested, but the universe has no elements.
    EmptyUniverse,
    /// More groups than a region key can hold.
    TooManyGroups { groups: usize, max: usize },
    /// A region key string could not be parsed.
    InvalidKey(String),
    /// A fill option name is not one of `logic`, `number`, `percent`.
    UnknownFill(String),
    /// A region key does not have one flag per group.
    KeyArity { key: String, expected: usize },
    /// The number of groups is outside of what a diagram can draw.
    UnsupportedGroupCount { groups: usize },
    /// Number of group names does not match the number of groups.
    NameCount { expected: usize, actual: usize },
    /// Number of group colors does not match the number of groups.
    ColorCount { expected: usize, actual: usize },
}

impl fmt::Display for VennError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VennError::EmptyUniverse => {
                write!(f, "Cannot compute percentages: the union of all groups is empty")
            }
            VennError::TooManyGroups { groups, max } => {
                write!(f, "Too many groups: {} (at most {} supported)", groups, max)
            }
            VennError::InvalidKey(key) => write!(f, "Invalid region key: {:?}", key),
            VennError::UnknownFill(name) => write!(f, "Unknown fill option: {:?}", name),
            VennError::KeyArity { key, expected } => {
                write!(f, "Region key {:?} does not have {} flags", key, expected)
            }
            VennError::UnsupportedGroupCount { groups } => {
                write!(f, "Cannot draw a diagram for {} groups", groups)
            }
            VennError::NameCount { expected, actual } => {
                write!(f, "Expected {} group names, got {}", expected, actual)
            }
            VennError::ColorCount { expected, actual } => {
                write!(f, "Expected {} group colors, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for VennError {}
