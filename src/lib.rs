//! cellwidth - Terminal cell width of Unicode characters and strings
//!
//! Widths follow the POSIX `wcwidth()`/`wcswidth()` conventions, computed
//! from interval tables for a selectable Unicode version. Older versions
//! matter when displaying text produced by older software (a recorded
//! terminal session, say).
//!
//! # Single characters
//! ```
//! use cellwidth::wcwidth;
//!
//! assert_eq!(wcwidth('a'), 1);
//! assert_eq!(wcwidth('中'), 2);
//! assert_eq!(wcwidth('\u{301}'), 0);
//! assert_eq!(wcwidth('\x1b'), -1);
//! ```
//!
//! # Strings
//! ```
//! use cellwidth::wcswidth;
//!
//! assert_eq!(wcswidth("コンニチハ", None), 10);
//! assert_eq!(wcswidth("abc中文", Some(4)), 5);
//! assert_eq!(wcswidth("tab\there", None), -1);
//! ```
//!
//! # Choosing a Unicode version
//! ```
//! use cellwidth::{Classifier, WidthConfig};
//!
//! let classifier = Classifier::with_builtin_tables(&WidthConfig::default());
//!
//! // WATCH became an emoji (and wide) in Unicode 9.0
//! assert_eq!(classifier.width('\u{231a}', "5.2.0"), 1);
//! assert_eq!(classifier.width('\u{231a}', "9.0.0"), 2);
//!
//! // Unsupported versions resolve to the nearest lower one, with a warning
//! let resolution = classifier.resolve("10.0");
//! assert_eq!(resolution.version.to_string(), "9.0.0");
//! assert!(resolution.warning.is_some());
//! ```

mod classifier;
mod config;
mod emoji;
mod error;
mod interval;
mod resolver;
mod table_set;
mod tables;
mod text;
mod version;

pub use classifier::{classify, is_control, Classifier};
pub use config::{WidthConfig, UNICODE_VERSION_ENV};
pub use emoji::{EMOJI_BLOCK, VARIATION_SELECTORS, ZWJ};
pub use error::{TableError, VersionError};
pub use interval::{bisearch, Interval, Table};
pub use resolver::{resolve_version, Resolution, ResolveWarning, VersionResolver, AUTO, LATEST};
pub use table_set::{list_versions, TableSet, VersionTables};
pub use version::{UnicodeVersion, VersionRequest};

use once_cell::sync::Lazy;

/// Process-wide classifier over the built-in tables, configured from the environment
static DEFAULT_CLASSIFIER: Lazy<Classifier> =
    Lazy::new(|| Classifier::with_builtin_tables(&WidthConfig::from_env()));

/// The classifier behind [`wcwidth`] and [`wcswidth`]
pub fn default_classifier() -> &'static Classifier {
    &DEFAULT_CLASSIFIER
}

/// Cell width of one character under the `"auto"` Unicode version
///
/// # Returns
/// * `0` - NUL, combining marks and other characters without width
/// * `-1` - control characters
/// * `1` or `2` - cells occupied
pub fn wcwidth(c: char) -> i8 {
    DEFAULT_CLASSIFIER.width(c, AUTO)
}

/// Cell width of a string under the `"auto"` Unicode version
///
/// # Arguments
/// * `text` - String to measure
/// * `limit` - Measure only the first `limit` characters
///
/// # Returns
/// The total width, or `-1` if a non-printable character is found
pub fn wcswidth(text: &str, limit: Option<usize>) -> isize {
    DEFAULT_CLASSIFIER.string_width(text, limit, AUTO)
}
