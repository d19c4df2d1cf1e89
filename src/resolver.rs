//! Matching requested version tokens to supported table versions
//!
//! Tokens are `"auto"`, `"latest"` or a dotted version. Resolution never
//! fails: unknown or malformed versions fall back to a supported one and
//! carry a [`ResolveWarning`] describing the substitution.

use std::fmt;
use std::sync::{Arc, Mutex};

use hashlink::LruCache;

use crate::error::VersionError;
use crate::table_set::TableSet;
use crate::version::{UnicodeVersion, VersionRequest};

/// Token selecting the configured default version
pub const AUTO: &str = "auto";
/// Token selecting the newest supported version
pub const LATEST: &str = "latest";

/// Non-fatal diagnostic emitted while resolving a version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// Token could not be parsed; the latest version was used
    Unparseable {
        token: String,
        error: VersionError,
        fallback: UnicodeVersion,
    },
    /// No exact match; the nearest lower version was used
    Substituted {
        requested: String,
        resolved: UnicodeVersion,
    },
    /// Token is older than every supported version; the earliest was used
    BelowEarliest {
        requested: String,
        resolved: UnicodeVersion,
    },
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::Unparseable {
                token,
                error,
                fallback,
            } => write!(
                f,
                "Cannot parse Unicode version '{}' ({}), using latest {}",
                token, error, fallback
            ),
            ResolveWarning::Substituted {
                requested,
                resolved,
            } => write!(
                f,
                "Unicode version {} not supported, using nearest lower version {}",
                requested, resolved
            ),
            ResolveWarning::BelowEarliest {
                requested,
                resolved,
            } => write!(
                f,
                "Unicode version {} is older than all supported versions, using {}",
                requested, resolved
            ),
        }
    }
}

/// Outcome of resolving one version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Token as given by the caller
    pub requested: String,
    /// Always one of the table set's versions
    pub version: UnicodeVersion,
    pub warning: Option<ResolveWarning>,
}

/// Resolve `token` against `tables` without caching or logging.
///
/// `auto` is the configured default substituted for `"auto"`; when absent (or
/// itself `"auto"`) it means `"latest"`.
pub fn resolve_version(token: &str, auto: Option<&str>, tables: &TableSet) -> Resolution {
    let resolution = |version, warning| Resolution {
        requested: token.to_string(),
        version,
        warning,
    };

    let mut effective = token.trim();
    if effective.eq_ignore_ascii_case(AUTO) {
        effective = auto.map(str::trim).unwrap_or(LATEST);
        if effective.eq_ignore_ascii_case(AUTO) {
            effective = LATEST;
        }
    }

    let latest = tables.latest().version;
    if effective.eq_ignore_ascii_case(LATEST) {
        return resolution(latest, None);
    }

    let request = match VersionRequest::parse(effective) {
        Ok(request) => request,
        Err(error) => {
            let warning = ResolveWarning::Unparseable {
                token: effective.to_string(),
                error,
                fallback: latest,
            };
            return resolution(latest, Some(warning));
        }
    };

    match tables.versions().rev().find(|version| *version <= request.version) {
        Some(found) if request.is_exact(found) => resolution(found, None),
        Some(found) => resolution(
            found,
            Some(ResolveWarning::Substituted {
                requested: effective.to_string(),
                resolved: found,
            }),
        ),
        None => {
            let earliest = tables.earliest().version;
            resolution(
                earliest,
                Some(ResolveWarning::BelowEarliest {
                    requested: effective.to_string(),
                    resolved: earliest,
                }),
            )
        }
    }
}

/// Caching version resolver bound to one table set and `"auto"` default
pub struct VersionResolver {
    tables: Arc<TableSet>,
    auto: Option<String>,
    cache: Option<Mutex<LruCache<String, Resolution>>>,
}

impl VersionResolver {
    pub fn new(tables: Arc<TableSet>, auto: Option<String>, capacity: usize) -> Self {
        let cache = (capacity > 0).then(|| Mutex::new(LruCache::new(capacity)));
        Self {
            tables,
            auto,
            cache,
        }
    }

    /// Resolve a token, logging a warning the first time it needs a fallback
    pub fn resolve(&self, token: &str) -> Resolution {
        if let Some(hit) = self.cached(token) {
            return hit;
        }

        let resolution = resolve_version(token, self.auto.as_deref(), &self.tables);
        if let Some(warning) = &resolution.warning {
            log::warn!("{}", warning);
        }

        if let Some(cache) = &self.cache {
            if let Ok(mut cache) = cache.lock() {
                cache.insert(token.to_string(), resolution.clone());
            }
        }
        resolution
    }

    fn cached(&self, token: &str) -> Option<Resolution> {
        let mut cache = self.cache.as_ref()?.lock().ok()?;
        cache.get(token).cloned()
    }

    pub fn auto_version(&self) -> Option<&str> {
        self.auto.as_deref()
    }

    pub fn tables(&self) -> &Arc<TableSet> {
        &self.tables
    }
}

impl fmt::Debug for VersionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionResolver")
            .field("versions", &self.tables.versions().collect::<Vec<_>>())
            .field("auto", &self.auto)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Table;
    use crate::table_set::VersionTables;

    fn set(versions: &[&str]) -> TableSet {
        TableSet::new(
            versions
                .iter()
                .map(|v| {
                    VersionTables::new(
                        UnicodeVersion::parse(v).unwrap(),
                        Table::empty(),
                        Table::empty(),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    fn v(s: &str) -> UnicodeVersion {
        UnicodeVersion::parse(s).unwrap()
    }

    #[test]
    fn test_latest_is_maximum() {
        let tables = set(&["4.1.0", "5.0.0", "9.0.0"]);
        let resolution = resolve_version("latest", None, &tables);
        assert_eq!(resolution.version, v("9.0.0"));
        assert_eq!(resolution.warning, None);
    }

    #[test]
    fn test_exact_match_has_no_warning() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("5.0.0", None, &tables);
        assert_eq!(resolution.version, v("5.0.0"));
        assert_eq!(resolution.warning, None);
    }

    #[test]
    fn test_short_form_matches_exactly() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("5.0", None, &tables);
        assert_eq!(resolution.version, v("5.0.0"));
        assert_eq!(resolution.warning, None);
    }

    #[test]
    fn test_nearest_lower_version() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("4.9.9", None, &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert_eq!(
            resolution.warning,
            Some(ResolveWarning::Substituted {
                requested: "4.9.9".to_string(),
                resolved: v("4.1.0"),
            })
        );
    }

    #[test]
    fn test_newer_than_all_uses_latest() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("99.0", None, &tables);
        assert_eq!(resolution.version, v("5.0.0"));
        assert!(matches!(
            resolution.warning,
            Some(ResolveWarning::Substituted { .. })
        ));
    }

    #[test]
    fn test_below_earliest_uses_earliest() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("1", None, &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert_eq!(
            resolution.warning,
            Some(ResolveWarning::BelowEarliest {
                requested: "1".to_string(),
                resolved: v("4.1.0"),
            })
        );
    }

    #[test]
    fn test_unparseable_falls_back_to_latest() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("unicode-five", None, &tables);
        assert_eq!(resolution.version, v("5.0.0"));
        assert!(matches!(
            resolution.warning,
            Some(ResolveWarning::Unparseable {
                error: VersionError::Malformed { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_auto_uses_configured_version() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("auto", Some("4.1"), &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert_eq!(resolution.requested, "auto");
        assert_eq!(resolution.warning, None);
    }

    #[test]
    fn test_auto_without_config_is_latest() {
        let tables = set(&["4.1.0", "5.0.0"]);
        assert_eq!(resolve_version("auto", None, &tables).version, v("5.0.0"));
        assert_eq!(
            resolve_version("auto", Some("auto"), &tables).version,
            v("5.0.0")
        );
    }

    #[test]
    fn test_auto_config_falls_back_like_any_token() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("auto", Some("4.5"), &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert!(resolution.warning.is_some());
    }

    #[test]
    fn test_result_is_always_supported() {
        let tables = set(&["3.2.0", "9.0.0", "15.1.0"]);
        for token in ["", "auto", "latest", "0", "3.2", "8.9.9", "10", "200.1.1", "1.2.3.4", "?"] {
            let resolution = resolve_version(token, None, &tables);
            assert!(tables.contains(&resolution.version), "token {:?}", token);
        }
    }

    #[test]
    fn test_resolver_caches_per_token() {
        let tables = Arc::new(set(&["4.1.0", "5.0.0"]));
        let resolver = VersionResolver::new(tables, None, 4);
        let first = resolver.resolve("4.9.9");
        let second = resolver.resolve("4.9.9");
        assert_eq!(first, second);
        assert_eq!(resolver.cached("4.9.9"), Some(first));
        assert_eq!(resolver.cached("5.0.0"), None);
    }

    #[test]
    fn test_resolver_without_cache() {
        let tables = Arc::new(set(&["4.1.0", "5.0.0"]));
        let resolver = VersionResolver::new(tables, Some("4.1.0".to_string()), 0);
        assert_eq!(resolver.resolve("auto").version, v("4.1.0"));
        assert_eq!(resolver.cached("auto"), None);
    }

    #[test]
    fn test_extra_zero_components_match_exactly() {
        let tables = set(&["4.1.0", "5.0.0", "9.0.0"]);
        let resolution = resolve_version("4.1.0.0", None, &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert_eq!(resolution.warning, None);
    }

    #[test]
    fn test_extra_non_zero_component_resolves_lower() {
        let tables = set(&["4.1.0", "5.0.0", "9.0.0"]);
        let resolution = resolve_version("4.1.0.1", None, &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert_eq!(
            resolution.warning,
            Some(ResolveWarning::Substituted {
                requested: "4.1.0.1".to_string(),
                resolved: v("4.1.0"),
            })
        );
    }

    #[test]
    fn test_extra_components_below_earliest() {
        let tables = set(&["4.1.0", "5.0.0"]);
        let resolution = resolve_version("0.0.0.1", None, &tables);
        assert_eq!(resolution.version, v("4.1.0"));
        assert!(matches!(
            resolution.warning,
            Some(ResolveWarning::BelowEarliest { .. })
        ));
    }

    mod logging {
        use std::cell::RefCell;

        use log::{Level, LevelFilter, Log, Metadata, Record};

        use super::*;

        thread_local! {
            static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        }

        /// Collects warn records emitted on the calling thread
        struct ThreadLogger;

        impl Log for ThreadLogger {
            fn enabled(&self, metadata: &Metadata) -> bool {
                metadata.level() <= Level::Warn
            }

            fn log(&self, record: &Record) {
                if record.level() == Level::Warn {
                    WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: ThreadLogger = ThreadLogger;

        fn warnings_during(f: impl FnOnce()) -> Vec<String> {
            // Another test may have installed it already
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Warn);
            WARNINGS.with(|w| w.borrow_mut().clear());
            f();
            WARNINGS.with(|w| w.borrow_mut().drain(..).collect())
        }

        #[test]
        fn test_cached_fallback_logs_once() {
            let resolver = VersionResolver::new(Arc::new(set(&["4.1.0", "5.0.0"])), None, 4);
            let warnings = warnings_during(|| {
                resolver.resolve("4.9.9");
                resolver.resolve("4.9.9");
            });
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("4.9.9"));
            assert!(warnings[0].contains("4.1.0"));
        }

        #[test]
        fn test_uncached_fallback_logs_every_call() {
            let resolver = VersionResolver::new(Arc::new(set(&["4.1.0", "5.0.0"])), None, 0);
            let warnings = warnings_during(|| {
                resolver.resolve("4.9.9");
                resolver.resolve("4.9.9");
            });
            assert_eq!(warnings.len(), 2);
        }

        #[test]
        fn test_exact_match_logs_nothing() {
            let resolver = VersionResolver::new(Arc::new(set(&["4.1.0", "5.0.0"])), None, 4);
            let warnings = warnings_during(|| {
                resolver.resolve("5.0.0");
                resolver.resolve("latest");
            });
            assert!(warnings.is_empty());
        }
    }
}
