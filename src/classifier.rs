//! Per-character width classification
//!
//! A width is one of:
//! * `-1` - not printable, or indeterminate (C0/C1 controls)
//! * `0`  - no effect on the cursor (NUL, combining marks, format controls)
//! * `1`  - a single cell
//! * `2`  - two cells (East Asian Wide/Fullwidth, emoji)
//!
//! East Asian Ambiguous characters are always narrow.

use std::fmt;
use std::sync::{Arc, Mutex};

use hashlink::LruCache;

use crate::config::WidthConfig;
use crate::emoji::{
    is_emoji_block, is_variation_selector, is_vs16_narrow_to_wide, is_zero_width_control,
    GENDER_SIGNS, GENDER_SIGN_EMOJI_SINCE, ZWJ,
};
use crate::resolver::{Resolution, VersionResolver};
use crate::table_set::{TableSet, VersionTables};
use crate::version::UnicodeVersion;

/// C0 controls except NUL, plus DEL and the C1 controls
pub fn is_control(cp: u32) -> bool {
    (1..0x20).contains(&cp) || (0x7f..0xa0).contains(&cp)
}

/// Width of `cp` against one version's tables.
///
/// Rules are checked in order and the first match wins; the categories
/// overlap, so reordering changes results.
pub fn classify(cp: u32, tables: &VersionTables) -> i8 {
    if is_zero_width_control(cp) {
        return 0;
    }
    if is_control(cp) {
        return -1;
    }
    if tables.zero_width.contains(cp) {
        return 0;
    }
    if is_emoji_block(cp) {
        return 2;
    }
    if cp == ZWJ {
        return 0;
    }
    if tables.wide.contains(cp) {
        return 2;
    }
    if is_variation_selector(cp) {
        return 0;
    }
    if is_vs16_narrow_to_wide(cp) {
        return 2;
    }
    if GENDER_SIGNS.contains(&cp) && tables.version >= GENDER_SIGN_EMOJI_SINCE {
        return 2;
    }
    1
}

/// Version-aware width classifier.
///
/// Holds its table set, a version resolver for tokens like `"auto"` and
/// `"9.0"`, and a bounded LRU cache of computed widths. Safe to share
/// between threads.
pub struct Classifier {
    resolver: VersionResolver,
    cache: Option<Mutex<LruCache<(u32, UnicodeVersion), i8>>>,
}

impl Classifier {
    pub fn new(tables: Arc<TableSet>, config: &WidthConfig) -> Self {
        let resolver = VersionResolver::new(
            tables,
            config.unicode_version.clone(),
            config.version_cache_capacity,
        );
        let cache = (config.width_cache_capacity > 0)
            .then(|| Mutex::new(LruCache::new(config.width_cache_capacity)));
        log::debug!(
            "width classifier: {} versions, width cache {}, version cache {}",
            resolver.tables().entries().len(),
            config.width_cache_capacity,
            config.version_cache_capacity
        );
        Self { resolver, cache }
    }

    /// Classifier over the built-in Unicode tables
    pub fn with_builtin_tables(config: &WidthConfig) -> Self {
        Self::new(TableSet::builtin(), config)
    }

    /// Cell width of one character
    pub fn width(&self, c: char, version: &str) -> i8 {
        self.width_of(u32::from(c), version)
    }

    /// Cell width of one code point; values outside Unicode fall to the defaults
    pub fn width_of(&self, cp: u32, version: &str) -> i8 {
        if is_zero_width_control(cp) {
            return 0;
        }
        if is_control(cp) {
            return -1;
        }
        let resolution = self.resolver.resolve(version);
        self.width_in(cp, resolution.version)
    }

    /// Width of a string that must hold exactly one code point, -1 otherwise
    pub fn width_str(&self, text: &str, version: &str) -> i8 {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.width(c, version),
            _ => -1,
        }
    }

    /// Width of `cp` under an already resolved version
    pub(crate) fn width_in(&self, cp: u32, version: UnicodeVersion) -> i8 {
        if let Some(width) = self.cached(cp, version) {
            return width;
        }

        let tables = self.tables();
        let width = match tables.get(&version) {
            Ok(entry) => classify(cp, entry),
            Err(_) => classify(cp, tables.latest()),
        };

        if let Some(cache) = &self.cache {
            if let Ok(mut cache) = cache.lock() {
                cache.insert((cp, version), width);
            }
        }
        width
    }

    fn cached(&self, cp: u32, version: UnicodeVersion) -> Option<i8> {
        let mut cache = self.cache.as_ref()?.lock().ok()?;
        cache.get(&(cp, version)).copied()
    }

    pub fn resolve(&self, version: &str) -> Resolution {
        self.resolver.resolve(version)
    }

    pub fn tables(&self) -> &Arc<TableSet> {
        self.resolver.tables()
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("resolver", &self.resolver)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{Interval, Table};

    fn v(s: &str) -> UnicodeVersion {
        UnicodeVersion::parse(s).unwrap()
    }

    /// Two versions; 0x4e00..0x4e0f is wide in both, 0x3000 only in 9.0.0
    fn classifier() -> Classifier {
        let zero = Table::new(vec![
            Interval::new(0x0300, 0x036f),
            Interval::new(0xfe00, 0xfe0f),
            Interval::new(0x1f3fb, 0x1f3fb),
        ])
        .unwrap();
        let wide_old = Table::new(vec![Interval::new(0x4e00, 0x4e0f)]).unwrap();
        let wide_new = Table::new(vec![
            Interval::new(0x3000, 0x3000),
            Interval::new(0x4e00, 0x4e0f),
        ])
        .unwrap();
        let tables = TableSet::new(vec![
            VersionTables::new(v("4.1.0"), zero.clone(), wide_old),
            VersionTables::new(v("9.0.0"), zero, wide_new),
        ])
        .unwrap();
        Classifier::new(Arc::new(tables), &WidthConfig::default())
    }

    #[test]
    fn test_nul_is_zero() {
        assert_eq!(classifier().width_of(0, "auto"), 0);
    }

    #[test]
    fn test_controls_are_not_printable() {
        let c = classifier();
        for cp in (1..0x20).chain(0x7f..0xa0) {
            assert_eq!(c.width_of(cp, "auto"), -1, "cp {:x}", cp);
        }
        assert_eq!(c.width_of(0xa0, "auto"), 1);
        assert_eq!(c.width_of(0x20, "auto"), 1);
    }

    #[test]
    fn test_zero_width_table() {
        let c = classifier();
        assert_eq!(c.width_of(0x0300, "latest"), 0);
        assert_eq!(c.width_of(0x036f, "4.1.0"), 0);
        assert_eq!(c.width_of(0x0370, "latest"), 1);
    }

    #[test]
    fn test_zero_width_wins_over_emoji_block() {
        assert_eq!(classifier().width_of(0x1f3fb, "latest"), 0);
        assert_eq!(classifier().width_of(0x1f3fc, "latest"), 2);
    }

    #[test]
    fn test_emoji_block_is_wide_without_tables() {
        let c = classifier();
        assert_eq!(c.width_of(0x1f600, "4.1.0"), 2);
        assert_eq!(c.width_of(0x1f000, "4.1.0"), 2);
        assert_eq!(c.width_of(0x1ffff, "4.1.0"), 2);
    }

    #[test]
    fn test_zwj_is_zero() {
        assert_eq!(classifier().width_of(ZWJ, "latest"), 0);
    }

    #[test]
    fn test_wide_table_depends_on_version() {
        let c = classifier();
        assert_eq!(c.width_of(0x4e00, "4.1.0"), 2);
        assert_eq!(c.width_of(0x3000, "4.1.0"), 1);
        assert_eq!(c.width_of(0x3000, "9.0.0"), 2);
        assert_eq!(c.width_of(0x4e10, "9.0.0"), 1);
    }

    #[test]
    fn test_variation_selectors_are_zero_without_tables() {
        let tables = TableSet::new(vec![VersionTables::new(
            v("9.0.0"),
            Table::empty(),
            Table::empty(),
        )])
        .unwrap();
        let c = Classifier::new(Arc::new(tables), &WidthConfig::default());
        assert_eq!(c.width_of(0xfe0f, "latest"), 0);
        assert_eq!(c.width_of(0xfe00, "latest"), 0);
        assert_eq!(c.width_of(0xfe10, "latest"), 1);
    }

    #[test]
    fn test_vs16_exceptions_are_wide() {
        let c = classifier();
        assert_eq!(c.width('\u{2764}', "latest"), 2);
        assert_eq!(c.width('\u{00a9}', "4.1.0"), 2);
        assert_eq!(c.width('#', "latest"), 1);
        assert_eq!(c.width('7', "latest"), 1);
    }

    #[test]
    fn test_gender_signs_by_version() {
        let c = classifier();
        assert_eq!(c.width_of(0x2642, "4.1.0"), 1);
        assert_eq!(c.width_of(0x2642, "9.0.0"), 2);
        assert_eq!(c.width_of(0x2640, "4.1.0"), 1);
        assert_eq!(c.width_of(0x2640, "9.0.0"), 2);
        assert_eq!(c.width_of(0x2641, "9.0.0"), 1);
    }

    #[test]
    fn test_format_controls_are_zero() {
        let c = classifier();
        for cp in [0x034f, 0x200b, 0x200e, 0x2028, 0x202e, 0x2060, 0x2063] {
            assert_eq!(c.width_of(cp, "latest"), 0, "cp {:x}", cp);
        }
        assert_eq!(c.width_of(0x00ad, "latest"), 1);
    }

    #[test]
    fn test_ascii_is_narrow() {
        let c = classifier();
        for cp in 0x20..0x7f {
            assert_eq!(c.width_of(cp, "latest"), 1, "cp {:x}", cp);
        }
    }

    #[test]
    fn test_totality_over_codespace() {
        let c = classifier();
        for cp in (0..0x110000).step_by(97).chain([u32::MAX, 0x110000]) {
            assert!((-1..=2).contains(&c.width_of(cp, "latest")), "cp {:x}", cp);
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        let c = classifier();
        for cp in [0x41, 0x300, 0x3000, 0x2642, 0x1f600] {
            let first = c.width_of(cp, "9.0.0");
            assert_eq!(c.width_of(cp, "9.0.0"), first);
            assert_eq!(c.cached(cp, v("9.0.0")), Some(first));
        }
    }

    #[test]
    fn test_cache_disabled() {
        let config = WidthConfig::default().with_cache_capacity(0, 0);
        let c = Classifier::with_builtin_tables(&config);
        assert_eq!(c.width('中', "latest"), 2);
        assert_eq!(c.cached(u32::from('中'), c.resolve("latest").version), None);
    }

    #[test]
    fn test_width_str_requires_single_code_point() {
        let c = classifier();
        assert_eq!(c.width_str("a", "latest"), 1);
        assert_eq!(c.width_str("", "latest"), -1);
        assert_eq!(c.width_str("ab", "latest"), -1);
        assert_eq!(c.width_str("e\u{301}", "latest"), -1);
        assert_eq!(c.width_str("\u{4e00}", "latest"), 2);
    }

    #[test]
    fn test_auto_follows_config() {
        let config = WidthConfig::default().with_unicode_version(Some("4.1".to_string()));
        let tables = classifier().tables().clone();
        let c = Classifier::new(tables, &config);
        assert_eq!(c.width_of(0x3000, "auto"), 1);
        assert_eq!(c.width_of(0x3000, "latest"), 2);
    }

    #[test]
    fn test_unknown_version_falls_back() {
        let c = classifier();
        assert_eq!(c.width_of(0x3000, "8.9.9"), 1);
        assert_eq!(c.width_of(0x3000, "10.0"), 2);
        assert_eq!(c.width_of(0x3000, "garbage"), 2);
        assert_eq!(c.width_of(0x3000, "1.0"), 1);
    }
}
