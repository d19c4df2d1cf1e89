use std::fmt;

use crate::version::UnicodeVersion;

/// Errors produced when parsing or looking up a Unicode version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Empty version string
    Empty,
    /// A component is not a decimal integer (or overflows)
    Malformed { token: String, offset: usize },
    /// More than `major.minor.micro`
    TooManyComponents { token: String, count: usize },
    /// Well-formed version with no table in the set
    Unsupported(UnicodeVersion),
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionError::Empty => write!(f, "Empty version string"),
            VersionError::Malformed { token, offset } => {
                write!(f, "Malformed version '{}' at offset {}", token, offset)
            }
            VersionError::TooManyComponents { token, count } => write!(
                f,
                "Version '{}' has {} components (at most 3 allowed)",
                token, count
            ),
            VersionError::Unsupported(version) => {
                write!(f, "Unicode version {} is not supported", version)
            }
        }
    }
}

impl std::error::Error for VersionError {}

/// Errors produced when assembling interval tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table set needs at least one version
    EmptySet,
    /// The same version was supplied twice
    DuplicateVersion(UnicodeVersion),
    /// Interval at `index` is inverted, overlaps or precedes its predecessor
    Unordered { index: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::EmptySet => write!(f, "Table set has no versions"),
            TableError::DuplicateVersion(version) => {
                write!(f, "Duplicate tables for Unicode version {}", version)
            }
            TableError::Unordered { index } => {
                write!(f, "Interval {} is not sorted and disjoint", index)
            }
        }
    }
}

impl std::error::Error for TableError {}
