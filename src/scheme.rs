use tracing::{debug, trace};

use crate::{
    dev::{split_dev_suffix, strip_dev_suffix, to_hyphen_convention, DevConvention},
    error::ValidationError,
    level::{BumpLevel, ReleaseLevel},
    version::{strip_prerelease_build, BaseVersion},
};

/// The outcome of [`Scheme::bump_with_dev`].
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct BumpResult {
    /// The version string that was bumped, verbatim.
    pub current_version: String,
    /// The current version with its dev suffix, pre-release and build metadata removed, before
    /// bumping.
    pub base_version: String,
    /// The bumped version, with a `.devN` suffix when a dev version was requested.
    pub new_version: String,
    /// [`new_version`](Self::new_version) with its dev suffix written as `-dev.N`.
    pub npm_version: String,
    /// [`new_version`](Self::new_version) without any dev suffix.
    pub mod_version: String,
}

/// A set of rules for validating and bumping version strings.
///
/// Implementations are stateless: every method is a pure function of its arguments. The trait
/// is object safe, so callers can hold a `&dyn Scheme` and have a different strategy swapped in.
pub trait Scheme {
    /// Returns the name of the scheme for messages.
    fn name(&self) -> &'static str;

    /// Checks that `version` is well formed.
    fn validate(&self, version: &str) -> Result<(), ValidationError>;

    /// Bumps the release part of `version` by `level`, discarding any dev suffix, pre-release and
    /// build metadata.
    fn bump(&self, version: &str, level: ReleaseLevel) -> Result<String, ValidationError>;

    /// Bumps `version` by `level`, then attaches a development counter if `is_dev` is set.
    fn bump_with_dev(
        &self,
        version: &str,
        level: BumpLevel,
        is_dev: bool,
    ) -> Result<BumpResult, ValidationError>;
}

/// Semantic versions with an optional trailing development counter.
///
/// A version is `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, optionally followed by `.devN` or
/// `-dev.N`. Bumping keeps only `MAJOR.MINOR.PATCH` and, for dev versions, a `.devN` counter.
///
/// # Examples
///
/// ```
/// use devver::prelude::*;
///
/// let result = DevSem.bump_with_dev("1.2.3.dev4", BumpLevel::Dev, true).unwrap();
/// assert_eq!("1.2.3.dev5", result.new_version);
/// assert_eq!("1.2.3-dev.5", result.npm_version);
/// assert_eq!("1.2.3", result.mod_version);
///
/// let result = DevSem.bump_with_dev("1.2.3.dev4", BumpLevel::Minor, true).unwrap();
/// assert_eq!("1.3.0.dev0", result.new_version);
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct DevSem;

/// The default scheme, shared by the whole process.
pub static DEFAULT_SCHEME: DevSem = DevSem;

/// Returns the default scheme.
pub fn default_scheme() -> &'static dyn Scheme {
    &DEFAULT_SCHEME
}

impl DevSem {
    /// Reduces a version to its base, returning the version with only its dev suffix removed,
    /// the dev counter, and the base.
    fn reduce(version: &str) -> Result<(&str, Option<u64>, BaseVersion), ValidationError> {
        let (without_dev, dev) = split_dev_suffix(version)?;
        let base = BaseVersion::parse(strip_prerelease_build(without_dev)?)?;
        Ok((without_dev, dev.map(|suffix| suffix.counter), base))
    }
}

impl Scheme for DevSem {
    fn name(&self) -> &'static str {
        "semantic with dev suffix"
    }

    fn validate(&self, version: &str) -> Result<(), ValidationError> {
        trace!(version, "validating");
        Self::reduce(version).map(|_| ())
    }

    fn bump(&self, version: &str, level: ReleaseLevel) -> Result<String, ValidationError> {
        let (_, _, base) = Self::reduce(version)?;
        let bumped = base.bump(level)?.to_string();
        debug!(version, %level, %bumped, "bumped release");
        Ok(bumped)
    }

    fn bump_with_dev(
        &self,
        version: &str,
        level: BumpLevel,
        is_dev: bool,
    ) -> Result<BumpResult, ValidationError> {
        let (without_dev, counter, base) = Self::reduce(version)?;

        let bumped = match level.release_level() {
            Some(release_level) => base.bump(release_level)?,
            None => base,
        }
        .to_string();

        let new_version = if is_dev {
            // the counter only carries over when nothing else about the version changed
            let next_counter = match counter {
                Some(counter) if bumped == without_dev => counter.checked_add(1).ok_or_else(|| {
                    ValidationError::DevCounterOutOfRange {
                        version: version.to_owned(),
                    }
                })?,
                _ => 0,
            };
            DevConvention::Dot.render(&bumped, next_counter)
        } else {
            bumped
        };

        let result = BumpResult {
            current_version: version.to_owned(),
            base_version: base.to_string(),
            npm_version: to_hyphen_convention(&new_version),
            mod_version: strip_dev_suffix(&new_version).to_owned(),
            new_version,
        };
        debug!(
            version,
            %level,
            is_dev,
            new_version = %result.new_version,
            "bumped with dev"
        );
        Ok(result)
    }
}
