//! Development suffixes: a counter appended to a version, written either as `.devN` (PEP 440
//! style) or `-dev.N` (a semver pre-release, as npm expects it).

use core::fmt::{self, Display};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static DEV_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\.dev|-dev\.)([0-9]+)$").unwrap());

/// A trailing `-dev.` marker always introduces a counter, whatever follows it in the last
/// identifier.
static HYPHEN_DEV_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-dev\.[^.+]*$").unwrap());

static DOT_DEV_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.dev([0-9]+)$").unwrap());

/// The textual convention used to attach a development counter to a version.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DevConvention {
    /// `1.2.3.dev4`
    Dot,
    /// `1.2.3-dev.4`
    Hyphen,
}

impl DevConvention {
    /// Returns the text that sits between a version and its counter.
    pub fn separator(&self) -> &'static str {
        match self {
            DevConvention::Dot => ".dev",
            DevConvention::Hyphen => "-dev.",
        }
    }

    /// Appends `counter` to `version` using this convention.
    ///
    /// ```
    /// use devver::prelude::*;
    ///
    /// assert_eq!("1.2.3.dev0", DevConvention::Dot.render("1.2.3", 0));
    /// assert_eq!("1.2.3-dev.0", DevConvention::Hyphen.render("1.2.3", 0));
    /// ```
    pub fn render(&self, version: &str, counter: u64) -> String {
        format!("{version}{}{counter}", self.separator())
    }
}

/// A development suffix found at the end of a version string.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct DevSuffix {
    /// The development counter.
    pub counter: u64,
    /// How the counter was written.
    pub convention: DevConvention,
}

impl Display for DevSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.convention.separator(), self.counter)
    }
}

/// Splits a trailing development suffix off `version`.
///
/// Returns the version without the suffix and the suffix, if any. Only a suffix whose counter is
/// made of ASCII digits is recognized, so `1.2.3.devx` comes back whole, with no suffix. Nothing
/// else about the version is checked.
///
/// # Errors
///
/// - If the version ends in a `-dev.` marker that is not followed by ASCII digits only (as in
///   `1.2.3-dev.x`), returns a [`ValidationError::InvalidSemver`].
/// - If the counter does not fit in a `u64`, returns a [`ValidationError::DevCounterOutOfRange`].
pub fn split_dev_suffix(version: &str) -> Result<(&str, Option<DevSuffix>), ValidationError> {
    let Some(captures) = DEV_SUFFIX_RE.captures(version) else {
        if HYPHEN_DEV_MARKER_RE.is_match(version) {
            return Err(ValidationError::InvalidSemver {
                version: version.to_owned(),
            });
        }
        return Ok((version, None));
    };
    let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
        return Ok((version, None));
    };

    let counter = digits
        .as_str()
        .parse::<u64>()
        .map_err(|_| ValidationError::DevCounterOutOfRange {
            version: version.to_owned(),
        })?;
    let convention = if whole.as_str().starts_with('.') {
        DevConvention::Dot
    } else {
        DevConvention::Hyphen
    };

    Ok((
        &version[..whole.start()],
        Some(DevSuffix {
            counter,
            convention,
        }),
    ))
}

/// Rewrites a trailing `.devN` suffix as `-dev.N`. Any other string is returned unchanged.
///
/// ```
/// use devver::to_hyphen_convention;
///
/// assert_eq!("1.2.3-dev.5", to_hyphen_convention("1.2.3.dev5"));
/// assert_eq!("1.2.3", to_hyphen_convention("1.2.3"));
/// ```
pub fn to_hyphen_convention(version: &str) -> String {
    DOT_DEV_SUFFIX_RE
        .replace(version, "-dev.${1}")
        .into_owned()
}

/// Removes a trailing development suffix in either convention.
pub fn strip_dev_suffix(version: &str) -> &str {
    DEV_SUFFIX_RE
        .find(version)
        .map_or(version, |suffix| &version[..suffix.start()])
}
