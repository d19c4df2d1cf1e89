//! Classifier configuration

/// Environment variable consulted by [`WidthConfig::from_env`]
pub const UNICODE_VERSION_ENV: &str = "UNICODE_VERSION";

/// Options for building a [`Classifier`](crate::Classifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthConfig {
    /// Version used when a caller asks for `"auto"`; `None` means `"latest"`
    pub unicode_version: Option<String>,
    /// Entries kept in the per-code-point width cache (0 disables it)
    pub width_cache_capacity: usize,
    /// Entries kept in the resolved-version cache (0 disables it)
    pub version_cache_capacity: usize,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            unicode_version: None,
            width_cache_capacity: 1024,
            version_cache_capacity: 32,
        }
    }
}

impl WidthConfig {
    /// Default configuration with the `"auto"` version taken from `UNICODE_VERSION`
    pub fn from_env() -> Self {
        Self::default().with_unicode_version(std::env::var(UNICODE_VERSION_ENV).ok())
    }

    /// Set the `"auto"` version; blank strings count as unset
    pub fn with_unicode_version(mut self, version: Option<String>) -> Self {
        self.unicode_version = version.filter(|v| !v.trim().is_empty());
        self
    }

    pub fn with_cache_capacity(mut self, widths: usize, versions: usize) -> Self {
        self.width_cache_capacity = widths;
        self.version_cache_capacity = versions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_override() {
        let config = WidthConfig::default();
        assert_eq!(config.unicode_version, None);
        assert!(config.width_cache_capacity > 0);
        assert!(config.version_cache_capacity > 0);
    }

    #[test]
    fn test_blank_version_is_unset() {
        let config = WidthConfig::default().with_unicode_version(Some("  ".to_string()));
        assert_eq!(config.unicode_version, None);
    }

    #[test]
    fn test_with_unicode_version() {
        let config = WidthConfig::default().with_unicode_version(Some("9.0".to_string()));
        assert_eq!(config.unicode_version.as_deref(), Some("9.0"));
    }

    #[test]
    fn test_with_cache_capacity() {
        let config = WidthConfig::default().with_cache_capacity(0, 4);
        assert_eq!(config.width_cache_capacity, 0);
        assert_eq!(config.version_cache_capacity, 4);
    }
}
