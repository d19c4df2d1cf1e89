//! Unicode version numbers

use std::fmt;
use std::str::FromStr;

use winnow::ascii::digit1;
use winnow::combinator::separated;
use winnow::ModalResult;
use winnow::Parser;

use crate::error::VersionError;

/// A Unicode release as `major.minor.micro`.
///
/// Missing trailing components parse as zero, so `"8"`, `"8.0"` and `"8.0.0"`
/// are the same version. Ordering is component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnicodeVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl UnicodeVersion {
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Parse a dotted version string of one to three decimal components
    pub fn parse(token: &str) -> Result<Self, VersionError> {
        let components = parse_components(token)?;
        if components.len() > 3 {
            return Err(VersionError::TooManyComponents {
                token: token.trim().to_string(),
                count: components.len(),
            });
        }
        Ok(Self::from_components(&components))
    }

    /// First three components, missing ones as zero
    fn from_components(components: &[u32]) -> Self {
        let mut padded = [0u32; 3];
        for (slot, component) in padded.iter_mut().zip(components) {
            *slot = *component;
        }
        Self::new(padded[0], padded[1], padded[2])
    }
}

/// A version asked for by a caller, which may carry more than three components.
///
/// Trailing components past `micro` only matter when non-zero; the request
/// then sits strictly above `version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRequest {
    pub version: UnicodeVersion,
    pub beyond: bool,
}

impl VersionRequest {
    pub fn parse(token: &str) -> Result<Self, VersionError> {
        let components = parse_components(token)?;
        Ok(Self {
            version: UnicodeVersion::from_components(&components),
            beyond: components.iter().skip(3).any(|component| *component != 0),
        })
    }

    /// Whether `version` satisfies the request without substitution
    pub fn is_exact(&self, version: UnicodeVersion) -> bool {
        !self.beyond && self.version == version
    }
}

fn parse_components(token: &str) -> Result<Vec<u32>, VersionError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(VersionError::Empty);
    }
    w_components
        .parse(trimmed)
        .map_err(|err| VersionError::Malformed {
            token: trimmed.to_string(),
            offset: err.offset(),
        })
}

/// Dot-separated decimal components
fn w_components(input: &mut &str) -> ModalResult<Vec<u32>> {
    separated(1.., digit1.parse_to::<u32>(), '.').parse_next(input)
}

impl FromStr for UnicodeVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        assert_eq!(
            UnicodeVersion::parse("15.1.0"),
            Ok(UnicodeVersion::new(15, 1, 0))
        );
    }

    #[test]
    fn test_parse_pads_missing_components() {
        let full = UnicodeVersion::new(8, 0, 0);
        assert_eq!(UnicodeVersion::parse("8"), Ok(full));
        assert_eq!(UnicodeVersion::parse("8.0"), Ok(full));
        assert_eq!(UnicodeVersion::parse("8.0.0"), Ok(full));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            UnicodeVersion::parse(" 9.0.0\n"),
            Ok(UnicodeVersion::new(9, 0, 0))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(UnicodeVersion::parse(""), Err(VersionError::Empty));
        assert_eq!(UnicodeVersion::parse("   "), Err(VersionError::Empty));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            UnicodeVersion::parse("x.y.z"),
            Err(VersionError::Malformed { .. })
        ));
        assert!(matches!(
            UnicodeVersion::parse("9.0.0-beta"),
            Err(VersionError::Malformed { .. })
        ));
        assert!(matches!(
            UnicodeVersion::parse("9..0"),
            Err(VersionError::Malformed { .. })
        ));
        assert!(matches!(
            UnicodeVersion::parse("9.0."),
            Err(VersionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_overflow_is_malformed() {
        assert!(matches!(
            UnicodeVersion::parse("99999999999"),
            Err(VersionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_too_many_components() {
        assert_eq!(
            UnicodeVersion::parse("1.2.3.4"),
            Err(VersionError::TooManyComponents {
                token: "1.2.3.4".to_string(),
                count: 4,
            })
        );
    }

    #[test]
    fn test_malformed_offset_is_within_trimmed_token() {
        let err = UnicodeVersion::parse("  5.x").unwrap_err();
        assert_eq!(
            err,
            VersionError::Malformed {
                token: "5.x".to_string(),
                offset: 1,
            }
        );
    }

    #[test]
    fn test_request_with_zero_extra_components() {
        let request = VersionRequest::parse("4.1.0.0").unwrap();
        assert_eq!(request.version, UnicodeVersion::new(4, 1, 0));
        assert!(!request.beyond);
        assert!(request.is_exact(UnicodeVersion::new(4, 1, 0)));
    }

    #[test]
    fn test_request_with_non_zero_extra_components() {
        let request = VersionRequest::parse("4.1.0.0.2").unwrap();
        assert_eq!(request.version, UnicodeVersion::new(4, 1, 0));
        assert!(request.beyond);
        assert!(!request.is_exact(UnicodeVersion::new(4, 1, 0)));
    }

    #[test]
    fn test_request_short_form() {
        let request = VersionRequest::parse("9").unwrap();
        assert!(request.is_exact(UnicodeVersion::new(9, 0, 0)));
        assert!(matches!(
            VersionRequest::parse("9.x"),
            Err(VersionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_ordering_is_component_wise() {
        let v = |s: &str| UnicodeVersion::parse(s).unwrap();
        assert!(v("4.1.0") < v("5.0.0"));
        assert!(v("9.0.0") < v("10.0.0"));
        assert!(v("12.1.0") > v("12.0.9"));
        assert_eq!(v("8.0").cmp(&v("8.0.0")), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_display_round_trips_padding() {
        assert_eq!(UnicodeVersion::parse("11").unwrap().to_string(), "11.0.0");
    }

    #[test]
    fn test_from_str() {
        let parsed: UnicodeVersion = "13.0.0".parse().unwrap();
        assert_eq!(parsed, UnicodeVersion::new(13, 0, 0));
    }
}
