//! # devver
//!
//! A library for validating and bumping semantic versions that may carry a development counter.
//!
//! Versions follow [SemVer](https://semver.org/) (`MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`) and
//! may additionally end in a development suffix, written either as `.devN` or as `-dev.N`.
//! Bumping always discards pre-release and build metadata; a development counter is attached only
//! when asked for.
//!
//! ## Examples
//!
//! Validate a version:
//!
//! ```
//! use devver::prelude::*;
//!
//! assert!(DevSem.validate("1.2.3-alpha.1+build.7").is_ok());
//! assert!(DevSem.validate("1.2.3-dev.4").is_ok());
//! assert!(DevSem.validate("1.02.3").is_err());
//! ```
//!
//! Bump a release:
//!
//! ```
//! use devver::prelude::*;
//!
//! assert_eq!("1.3.0", DevSem.bump("1.2.3.dev4", ReleaseLevel::Minor).unwrap());
//! ```
//!
//! Step through development versions:
//!
//! ```
//! use devver::prelude::*;
//!
//! let scheme = default_scheme();
//!
//! let first = scheme.bump_with_dev("1.2.3", BumpLevel::Patch, true).unwrap();
//! assert_eq!("1.2.4.dev0", first.new_version);
//!
//! let second = scheme.bump_with_dev(&first.new_version, BumpLevel::Dev, true).unwrap();
//! assert_eq!("1.2.4.dev1", second.new_version);
//! assert_eq!("1.2.4-dev.1", second.npm_version);
//!
//! let release = scheme.bump_with_dev(&second.new_version, BumpLevel::None, false).unwrap();
//! assert_eq!("1.2.4", release.new_version);
//! ```
//!
//! ## Bump Levels
//!
//! | Level | `1.2.3` becomes | Development counter |
//! |---|---|---|
//! | `major` | `2.0.0` | Reset to `0` |
//! | `minor` | `1.3.0` | Reset to `0` |
//! | `patch` | `1.2.4` | Reset to `0` |
//! | `dev` | `1.2.3` | Incremented if the version was already a dev version of `1.2.3`, else `0` |
//! | `none` | `1.2.3` | Same as `dev` |
//!
//! ## Prelude
//!
//! devver provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use devver::prelude::*;
//! ```
#![warn(missing_docs)]

mod dev;
mod error;
mod file;
mod level;
mod scheme;
mod version;

pub use crate::dev::{
    split_dev_suffix, strip_dev_suffix, to_hyphen_convention, DevConvention, DevSuffix,
};
pub use crate::error::{ValidationError, VersionFileError};
pub use crate::file::{VersionFile, DEFAULT_VERSION_FILE};
pub use crate::level::{BumpLevel, ReleaseLevel};
pub use crate::scheme::{default_scheme, BumpResult, DevSem, Scheme, DEFAULT_SCHEME};
pub use crate::version::BaseVersion;

/// A convenience module appropriate for glob imports (`use devver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::default_scheme;
    #[doc(no_inline)]
    pub use crate::BaseVersion;
    #[doc(no_inline)]
    pub use crate::BumpLevel;
    #[doc(no_inline)]
    pub use crate::BumpResult;
    #[doc(no_inline)]
    pub use crate::DevConvention;
    #[doc(no_inline)]
    pub use crate::DevSem;
    #[doc(no_inline)]
    pub use crate::ReleaseLevel;
    #[doc(no_inline)]
    pub use crate::Scheme;
    #[doc(no_inline)]
    pub use crate::ValidationError;
    #[doc(no_inline)]
    pub use crate::VersionFile;
    #[doc(no_inline)]
    pub use crate::VersionFileError;
}
