use core::{
    fmt::{self, Display},
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{error::ValidationError, level::ReleaseLevel};

/// Matches a numeric component: either `0` or digits without a leading zero.
const NUMBER: &str = r"(0|[1-9][0-9]*)";

/// Matches a dot-separated sequence of non-empty identifiers, used by pre-release and build
/// metadata alike.
const IDENTIFIERS: &str = r"([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)";

static BASE_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{NUMBER}\.{NUMBER}\.{NUMBER}$")).unwrap());

static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{NUMBER}\.{NUMBER}\.{NUMBER}(?:-{IDENTIFIERS})?(?:\+{IDENTIFIERS})?$"
    ))
    .unwrap()
});

/// Strips pre-release and build metadata from a semantic version, returning the leading
/// `MAJOR.MINOR.PATCH` as a slice of the input.
///
/// The whole input must match `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, otherwise a
/// [`ValidationError::InvalidSemver`] is returned. Stripping an already stripped version returns
/// it unchanged.
pub(crate) fn strip_prerelease_build(version: &str) -> Result<&str, ValidationError> {
    let captures = SEMVER_RE.captures(version).ok_or_else(|| {
        ValidationError::InvalidSemver {
            version: version.to_owned(),
        }
    })?;
    // group 3 (patch) always participates in a match
    let core_end = captures.get(3).map_or(version.len(), |patch| patch.end());
    Ok(&version[..core_end])
}

/// The numeric `MAJOR.MINOR.PATCH` part of a semantic version.
///
/// Displays canonically, with no leading zeros.
///
/// # Examples
///
/// ```
/// use devver::prelude::*;
///
/// let version: BaseVersion = "1.2.3".parse().unwrap();
/// assert_eq!("2.0.0", version.bump(ReleaseLevel::Major).unwrap().to_string());
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct BaseVersion {
    /// The major component.
    pub major: u64,
    /// The minor component.
    pub minor: u64,
    /// The patch component.
    pub patch: u64,
}

impl BaseVersion {
    /// Creates a base version from its components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a bare `MAJOR.MINOR.PATCH` string.
    ///
    /// # Errors
    ///
    /// - If the string has the wrong number of components, a component with a leading zero, or
    ///   any other character, returns a [`ValidationError::InvalidBaseVersion`].
    /// - If a component does not fit in a `u64`, returns a
    ///   [`ValidationError::ComponentOutOfRange`].
    pub fn parse(version: &str) -> Result<Self, ValidationError> {
        let captures = BASE_VERSION_RE.captures(version).ok_or_else(|| {
            ValidationError::InvalidBaseVersion {
                version: version.to_owned(),
            }
        })?;

        let component = |index: usize, name: &'static str| {
            captures[index]
                .parse::<u64>()
                .map_err(|_| ValidationError::ComponentOutOfRange {
                    version: version.to_owned(),
                    component: name,
                })
        };

        Ok(Self {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }

    /// Parses the base of a full semantic version, discarding any pre-release and build
    /// metadata.
    ///
    /// ```
    /// use devver::prelude::*;
    ///
    /// let version = BaseVersion::from_semver("1.2.3-alpha.1+build.7").unwrap();
    /// assert_eq!(BaseVersion::new(1, 2, 3), version);
    /// ```
    pub fn from_semver(version: &str) -> Result<Self, ValidationError> {
        Self::parse(strip_prerelease_build(version)?)
    }

    /// Returns the next version at `level`. Lower components reset to zero.
    ///
    /// # Errors
    ///
    /// If the bumped component would overflow, returns a [`ValidationError::BumpOverflow`].
    pub fn bump(&self, level: ReleaseLevel) -> Result<Self, ValidationError> {
        let overflow = || ValidationError::BumpOverflow {
            version: self.to_string(),
            level: level.name(),
        };

        Ok(match level {
            ReleaseLevel::Major => {
                Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            ReleaseLevel::Minor => Self::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            ReleaseLevel::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        })
    }
}

impl FromStr for BaseVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use rstest::rstest;

    #[rstest]
    #[case("0.0.0", BaseVersion::new(0, 0, 0))]
    #[case("1.2.3", BaseVersion::new(1, 2, 3))]
    #[case("10.20.30", BaseVersion::new(10, 20, 30))]
    #[case("18446744073709551615.0.0", BaseVersion::new(u64::MAX, 0, 0))]
    fn test_base_parse_ok(#[case] version_str: &str, #[case] expected: BaseVersion) {
        assert_eq!(Ok(expected), BaseVersion::parse(version_str));
        assert_eq!(version_str, expected.to_string());
    }

    #[rstest]
    #[case("1.2")] // too few components
    #[case("1.2.3.4")] // too many components
    #[case("01.2.3")] // zero-padding disallowed
    #[case("1.02.3")] // zero-padding disallowed
    #[case("1.2.03")] // zero-padding disallowed
    #[case("1.2.x")]
    #[case("1.2.3-alpha")] // pre-release is not part of the base grammar
    #[case(" 1.2.3")]
    #[case("")]
    fn test_base_parse_err(#[case] version_str: &str) {
        assert!(matches!(
            BaseVersion::parse(version_str),
            Err(ValidationError::InvalidBaseVersion { .. })
        ));
    }

    #[test]
    fn test_base_parse_out_of_range() {
        assert_eq!(
            Err(ValidationError::ComponentOutOfRange {
                version: "1.18446744073709551616.0".to_owned(),
                component: "minor",
            }),
            BaseVersion::parse("1.18446744073709551616.0")
        );
    }

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("1.2.3-alpha.1", "1.2.3")]
    #[case("1.2.3+build.7", "1.2.3")]
    #[case("1.2.3-alpha.1+build.7", "1.2.3")]
    #[case("1.2.3-x-y-z.--", "1.2.3")]
    #[case("0.0.0-0", "0.0.0")]
    fn test_strip_prerelease_build(#[case] version_str: &str, #[case] expected: &str) {
        let once = strip_prerelease_build(version_str).unwrap();
        assert_eq!(expected, once);
        assert_eq!(Ok(once), strip_prerelease_build(once));
    }

    #[rstest]
    #[case("1.2.3-")]
    #[case("1.2.3+")]
    #[case("1.2.3-rc..1")]
    #[case("1.2.3+build..1")]
    #[case("1.2.3-rc.")]
    #[case("1.2.3+build+meta")]
    #[case("1.2.3-rc_1")]
    #[case("01.2.3-rc.1")]
    fn test_strip_prerelease_build_err(#[case] version_str: &str) {
        assert_eq!(
            Err(ValidationError::InvalidSemver {
                version: version_str.to_owned()
            }),
            strip_prerelease_build(version_str)
        );
    }

    #[test]
    fn test_bump_grid() {
        for (major, minor, patch) in iproduct!([0, 1, 9, 10, 99], [0, 1, 9, 10], [0, 1, 9, 10]) {
            let version = BaseVersion::new(major, minor, patch);
            assert_eq!(
                Ok(BaseVersion::new(major + 1, 0, 0)),
                version.bump(ReleaseLevel::Major)
            );
            assert_eq!(
                Ok(BaseVersion::new(major, minor + 1, 0)),
                version.bump(ReleaseLevel::Minor)
            );
            assert_eq!(
                Ok(BaseVersion::new(major, minor, patch + 1)),
                version.bump(ReleaseLevel::Patch)
            );
        }
    }

    #[test]
    fn test_bump_overflow() {
        let version = BaseVersion::new(1, u64::MAX, 3);
        assert_eq!(
            Ok(BaseVersion::new(2, 0, 0)),
            version.bump(ReleaseLevel::Major)
        );
        assert!(matches!(
            version.bump(ReleaseLevel::Minor),
            Err(ValidationError::BumpOverflow { level: "minor", .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(BaseVersion::new(1, 2, 3) < BaseVersion::new(1, 2, 4));
        assert!(BaseVersion::new(1, 10, 0) > BaseVersion::new(1, 9, 99));
        assert!(BaseVersion::new(2, 0, 0) > BaseVersion::new(1, 99, 99));
    }
}
