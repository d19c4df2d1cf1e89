//! Interval tables keyed by Unicode version

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{TableError, VersionError};
use crate::interval::Table;
use crate::tables::VERSIONS;
use crate::version::UnicodeVersion;

/// Zero-width and wide tables for a single Unicode version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTables {
    pub version: UnicodeVersion,
    /// Non-spacing and enclosing combining marks
    pub zero_width: Table,
    /// East Asian Wide and Fullwidth characters
    pub wide: Table,
}

impl VersionTables {
    pub fn new(version: UnicodeVersion, zero_width: Table, wide: Table) -> Self {
        Self {
            version,
            zero_width,
            wide,
        }
    }
}

/// Every supported Unicode version with its tables, ascending by version.
///
/// A set is never empty and never holds two entries for the same version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSet {
    entries: Vec<VersionTables>,
}

static BUILTIN: Lazy<Arc<TableSet>> = Lazy::new(|| {
    let set = TableSet::new(builtin_entries())
        .expect("generated Unicode tables hold distinct versions");
    log::debug!("loaded {} built-in Unicode table versions", set.entries.len());
    Arc::new(set)
});

fn builtin_entries() -> Vec<VersionTables> {
    VERSIONS
        .iter()
        .map(|&(version, zero_width, wide)| {
            VersionTables::new(
                version,
                Table::from_static(zero_width),
                Table::from_static(wide),
            )
        })
        .collect()
}

impl TableSet {
    /// Build a set from per-version tables in any order
    pub fn new(mut entries: Vec<VersionTables>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::EmptySet);
        }
        entries.sort_by_key(|entry| entry.version);
        if let Some(pair) = entries.windows(2).find(|w| w[0].version == w[1].version) {
            return Err(TableError::DuplicateVersion(pair[0].version));
        }
        Ok(Self { entries })
    }

    /// The tables generated from the Unicode Character Database
    pub fn builtin() -> Arc<TableSet> {
        Arc::clone(&*BUILTIN)
    }

    /// Supported versions, ascending
    pub fn versions(&self) -> impl DoubleEndedIterator<Item = UnicodeVersion> + '_ {
        self.entries.iter().map(|entry| entry.version)
    }

    pub fn entries(&self) -> &[VersionTables] {
        &self.entries
    }

    pub fn latest(&self) -> &VersionTables {
        // Non-empty by construction
        &self.entries[self.entries.len() - 1]
    }

    pub fn earliest(&self) -> &VersionTables {
        &self.entries[0]
    }

    /// Exact lookup, no fallback
    pub fn get(&self, version: &UnicodeVersion) -> Result<&VersionTables, VersionError> {
        self.entries
            .binary_search_by_key(version, |entry| entry.version)
            .map(|index| &self.entries[index])
            .map_err(|_| VersionError::Unsupported(*version))
    }

    pub fn contains(&self, version: &UnicodeVersion) -> bool {
        self.get(version).is_ok()
    }
}

/// Supported Unicode versions of the built-in tables, ascending
pub fn list_versions() -> Vec<String> {
    TableSet::builtin()
        .versions()
        .map(|version| version.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn tables(version: &str) -> VersionTables {
        VersionTables::new(
            UnicodeVersion::parse(version).unwrap(),
            Table::empty(),
            Table::empty(),
        )
    }

    #[test]
    fn test_new_sorts_versions() {
        let set = TableSet::new(vec![tables("9.0.0"), tables("4.1.0"), tables("5.0.0")]).unwrap();
        let versions: Vec<String> = set.versions().map(|v| v.to_string()).collect();
        assert_eq!(versions, vec!["4.1.0", "5.0.0", "9.0.0"]);
        assert_eq!(set.earliest().version, UnicodeVersion::new(4, 1, 0));
        assert_eq!(set.latest().version, UnicodeVersion::new(9, 0, 0));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(TableSet::new(Vec::new()), Err(TableError::EmptySet));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = TableSet::new(vec![tables("9.0"), tables("9.0.0")]);
        assert_eq!(
            result,
            Err(TableError::DuplicateVersion(UnicodeVersion::new(9, 0, 0)))
        );
    }

    #[test]
    fn test_get_is_exact() {
        let set = TableSet::new(vec![tables("4.1.0"), tables("5.0.0")]).unwrap();
        assert!(set.get(&UnicodeVersion::new(5, 0, 0)).is_ok());
        assert_eq!(
            set.get(&UnicodeVersion::new(4, 9, 9)),
            Err(VersionError::Unsupported(UnicodeVersion::new(4, 9, 9)))
        );
    }

    #[test]
    fn test_builtin_versions_ascending() {
        let set = TableSet::builtin();
        let versions: Vec<UnicodeVersion> = set.versions().collect();
        assert_eq!(versions.len(), VERSIONS.len());
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_builtin_tables_are_sorted_and_disjoint() {
        for entry in TableSet::builtin().entries() {
            assert_eq!(entry.zero_width.validate(), Ok(()), "{}", entry.version);
            assert_eq!(entry.wide.validate(), Ok(()), "{}", entry.version);
            assert!(!entry.zero_width.is_empty());
            assert!(!entry.wide.is_empty());
        }
    }

    #[test]
    fn test_generated_versions_are_ascending_and_distinct() {
        let generated: Vec<UnicodeVersion> = VERSIONS.iter().map(|entry| entry.0).collect();
        assert!(generated.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(
            TableSet::new(builtin_entries()).as_ref(),
            Ok(&*TableSet::builtin())
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(Arc::ptr_eq(&TableSet::builtin(), &TableSet::builtin()));
    }

    #[test]
    fn test_builtin_combining_acute_is_zero_width() {
        let set = TableSet::builtin();
        assert!(set.latest().zero_width.contains(0x0301));
        assert!(set.earliest().zero_width.contains(0x0301));
    }

    #[test]
    fn test_table_contents_change_between_versions() {
        // U+1F9E0 BRAIN was added in Unicode 10.0.
        let set = TableSet::builtin();
        let v9 = set.get(&UnicodeVersion::new(9, 0, 0)).unwrap();
        let v11 = set.get(&UnicodeVersion::new(11, 0, 0)).unwrap();
        assert!(!v9.wide.contains(0x1f9e0));
        assert!(v11.wide.contains(0x1f9e0));
    }

    #[test]
    fn test_custom_tables() {
        let wide = Table::new(vec![Interval::new(0x4e00, 0x9fff)]).unwrap();
        let set = TableSet::new(vec![VersionTables::new(
            UnicodeVersion::new(1, 0, 0),
            Table::empty(),
            wide,
        )])
        .unwrap();
        assert!(set.latest().wide.contains(0x4e00));
    }
}
