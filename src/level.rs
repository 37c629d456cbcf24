use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::ValidationError;

/// A release level, one of `major`, `minor` or `patch`. Bumping by a release level always changes
/// the numeric part of a version.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ReleaseLevel {
    /// The major level. It is greater than the minor and patch levels.
    Major,
    /// The minor level. It is less than the major level and greater than the patch level.
    Minor,
    /// The patch level. It is less than the major and minor levels.
    Patch,
}

impl ReleaseLevel {
    /// Returns the lowercase name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            ReleaseLevel::Major => "major",
            ReleaseLevel::Minor => "minor",
            ReleaseLevel::Patch => "patch",
        }
    }

    fn order_key(&self) -> u8 {
        match self {
            ReleaseLevel::Major => 0,
            ReleaseLevel::Minor => 1,
            ReleaseLevel::Patch => 2,
        }
    }
}

impl PartialOrd for ReleaseLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReleaseLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse it so e.g. major > minor
        other.order_key().cmp(&self.order_key())
    }
}

impl Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReleaseLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match BumpLevel::from_str(s)?.release_level() {
            Some(level) => Ok(level),
            None => Err(ValidationError::UnknownLevel { name: s.to_owned() }),
        }
    }
}

/// A bump level as requested by a caller of
/// [`Scheme::bump_with_dev`](crate::Scheme::bump_with_dev).
///
/// `Dev` and `None` leave the numeric part of a version untouched. They differ only in intent:
/// both let the development counter advance when a dev suffix is requested.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum BumpLevel {
    /// Bump the major component.
    Major,
    /// Bump the minor component.
    Minor,
    /// Bump the patch component.
    Patch,
    /// Only advance the development counter.
    Dev,
    /// Change nothing numerically.
    None,
}

impl BumpLevel {
    /// All levels, in the order they are usually listed.
    pub const ALL: [BumpLevel; 5] = [
        BumpLevel::Major,
        BumpLevel::Minor,
        BumpLevel::Patch,
        BumpLevel::Dev,
        BumpLevel::None,
    ];

    /// Returns the lowercase name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
            BumpLevel::Dev => "dev",
            BumpLevel::None => "none",
        }
    }

    /// Returns the release level this bump changes, or `None` if it leaves the numeric part alone.
    pub fn release_level(&self) -> Option<ReleaseLevel> {
        match self {
            BumpLevel::Major => Some(ReleaseLevel::Major),
            BumpLevel::Minor => Some(ReleaseLevel::Minor),
            BumpLevel::Patch => Some(ReleaseLevel::Patch),
            BumpLevel::Dev | BumpLevel::None => None,
        }
    }
}

impl From<ReleaseLevel> for BumpLevel {
    fn from(level: ReleaseLevel) -> Self {
        match level {
            ReleaseLevel::Major => BumpLevel::Major,
            ReleaseLevel::Minor => BumpLevel::Minor,
            ReleaseLevel::Patch => BumpLevel::Patch,
        }
    }
}

impl Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BumpLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BumpLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| ValidationError::UnknownLevel { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_release_level_order() {
        assert!(ReleaseLevel::Major > ReleaseLevel::Minor);
        assert!(ReleaseLevel::Minor > ReleaseLevel::Patch);
        assert!(ReleaseLevel::Major > ReleaseLevel::Patch);
    }

    #[rstest]
    #[case("major", BumpLevel::Major)]
    #[case("minor", BumpLevel::Minor)]
    #[case("patch", BumpLevel::Patch)]
    #[case("dev", BumpLevel::Dev)]
    #[case("none", BumpLevel::None)]
    fn test_bump_level_names(#[case] name: &str, #[case] expected: BumpLevel) {
        assert_eq!(Ok(expected), name.parse());
        assert_eq!(name, expected.to_string());
    }

    #[rstest]
    #[case("Major")]
    #[case("")]
    #[case("release")]
    fn test_unknown_bump_level(#[case] name: &str) {
        assert_eq!(
            Err(ValidationError::UnknownLevel {
                name: name.to_owned()
            }),
            name.parse::<BumpLevel>()
        );
    }

    #[test]
    fn test_release_level_rejects_non_release_names() {
        assert!("dev".parse::<ReleaseLevel>().is_err());
        assert!("none".parse::<ReleaseLevel>().is_err());
        assert_eq!(Ok(ReleaseLevel::Minor), "minor".parse());
    }

    #[test]
    fn test_release_level_round_trips_through_bump_level() {
        for level in [ReleaseLevel::Major, ReleaseLevel::Minor, ReleaseLevel::Patch] {
            assert_eq!(Some(level), BumpLevel::from(level).release_level());
        }
        assert_eq!(None, BumpLevel::Dev.release_level());
        assert_eq!(None, BumpLevel::None.release_level());
    }
}
