//! Version resolution: fallbacks and the warnings they report
use std::sync::Arc;

use cellwidth::{
    resolve_version, Classifier, ResolveWarning, Table, TableSet, UnicodeVersion, VersionError,
    VersionTables, WidthConfig,
};

fn tables(versions: &[&str]) -> TableSet {
    TableSet::new(
        versions
            .iter()
            .map(|v| VersionTables::new(v.parse().unwrap(), Table::empty(), Table::empty()))
            .collect(),
    )
    .unwrap()
}

/// Requested version between two supported ones resolves downwards
#[test]
fn test_between_versions_resolves_lower() {
    let set = tables(&["4.1.0", "5.0.0"]);
    let resolution = resolve_version("4.9.9", None, &set);
    assert_eq!(resolution.version.to_string(), "4.1.0");
    insta::assert_snapshot!(
        resolution.warning.unwrap().to_string(),
        @"Unicode version 4.9.9 not supported, using nearest lower version 4.1.0"
    );
}

/// Requested version older than everything resolves to the earliest
#[test]
fn test_too_old_resolves_earliest() {
    let set = tables(&["4.1.0", "5.0.0"]);
    let resolution = resolve_version("1", None, &set);
    assert_eq!(resolution.version.to_string(), "4.1.0");
    insta::assert_snapshot!(
        resolution.warning.unwrap().to_string(),
        @"Unicode version 1 is older than all supported versions, using 4.1.0"
    );
}

/// Garbage resolves to latest and says why
#[test]
fn test_garbage_resolves_latest() {
    let set = tables(&["4.1.0", "5.0.0"]);
    let resolution = resolve_version("5.x", None, &set);
    assert_eq!(resolution.version.to_string(), "5.0.0");
    insta::assert_snapshot!(
        resolution.warning.unwrap().to_string(),
        @"Cannot parse Unicode version '5.x' (Malformed version '5.x' at offset 1), using latest 5.0.0"
    );
}

/// Trailing zero components name the same version
#[test]
fn test_extra_zero_components_resolve_exactly() {
    let set = tables(&["4.1.0", "5.0.0"]);
    let resolution = resolve_version("4.1.0.0", None, &set);
    assert_eq!(resolution.version.to_string(), "4.1.0");
    assert!(resolution.warning.is_none());
}

/// A non-zero fourth component is newer than its three-part prefix
#[test]
fn test_extra_non_zero_component_resolves_lower() {
    let set = tables(&["4.1.0", "5.0.0"]);
    let resolution = resolve_version("4.1.0.1", None, &set);
    assert_eq!(resolution.version.to_string(), "4.1.0");
    insta::assert_snapshot!(
        resolution.warning.unwrap().to_string(),
        @"Unicode version 4.1.0.1 not supported, using nearest lower version 4.1.0"
    );

    let resolution = resolve_version("3.9.9.9", None, &set);
    assert_eq!(resolution.version.to_string(), "4.1.0");
    assert!(matches!(
        resolution.warning,
        Some(ResolveWarning::BelowEarliest { .. })
    ));
}

/// Exact and latest lookups are silent
#[test]
fn test_no_warning_on_exact_or_latest() {
    let set = tables(&["4.1.0", "5.0.0"]);
    assert!(resolve_version("4.1.0", None, &set).warning.is_none());
    assert!(resolve_version("latest", None, &set).warning.is_none());
    assert!(resolve_version("LATEST", None, &set).warning.is_none());
    assert!(resolve_version("auto", None, &set).warning.is_none());
}

/// Unsupported is a lookup error, distinct from parse errors
#[test]
fn test_strict_lookup_reports_unsupported() {
    let set = tables(&["4.1.0", "5.0.0"]);
    let missing = UnicodeVersion::new(4, 9, 9);
    assert_eq!(set.get(&missing), Err(VersionError::Unsupported(missing)));
    insta::assert_snapshot!(
        VersionError::Unsupported(missing).to_string(),
        @"Unicode version 4.9.9 is not supported"
    );
}

/// The configured default feeds "auto" through the same fallback rules
#[test]
fn test_configured_default_for_auto() {
    let config = WidthConfig::default().with_unicode_version(Some("11.0.0".to_string()));
    let classifier = Classifier::with_builtin_tables(&config);
    assert_eq!(classifier.resolve("auto").version.to_string(), "11.0.0");

    let config = WidthConfig::default().with_unicode_version(Some("10.0.0".to_string()));
    let classifier = Classifier::with_builtin_tables(&config);
    let resolution = classifier.resolve("auto");
    assert_eq!(resolution.version.to_string(), "9.0.0");
    assert!(matches!(
        resolution.warning,
        Some(ResolveWarning::Substituted { .. })
    ));
}

/// Every built-in version resolves to itself
#[test]
fn test_builtin_versions_resolve_exactly() {
    let classifier = Classifier::with_builtin_tables(&WidthConfig::default());
    for version in cellwidth::list_versions() {
        let resolution = classifier.resolve(&version);
        assert_eq!(resolution.version.to_string(), version);
        assert!(resolution.warning.is_none());
    }
}

/// Cached resolutions keep their warning
#[test]
fn test_cached_resolution_keeps_warning() {
    let classifier = Classifier::new(Arc::new(tables(&["4.1.0", "5.0.0"])), &WidthConfig::default());
    let first = classifier.resolve("4.5");
    let second = classifier.resolve("4.5");
    assert_eq!(first, second);
    assert!(second.warning.is_some());
}

/// The emoji blocks are wide whatever version is picked
#[test]
fn test_emoji_block_ignores_version() {
    let classifier = Classifier::with_builtin_tables(&WidthConfig::default());
    for version in ["3.2.0", "5.2", "9", "latest", "bogus"] {
        assert_eq!(classifier.width('\u{1f600}', version), 2, "{}", version);
    }
}
