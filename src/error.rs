use std::{io, path::PathBuf};

/// An error raised when a version string does not satisfy the grammar an operation expects.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// The version string does not match `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    #[error("Invalid semver version `{version}`: expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")]
    InvalidSemver {
        /// The offending version string.
        version: String,
    },

    /// The version string does not match a bare `MAJOR.MINOR.PATCH`.
    #[error("Invalid semver base version `{version}`: expected MAJOR.MINOR.PATCH")]
    InvalidBaseVersion {
        /// The offending version string.
        version: String,
    },

    /// A numeric component is grammatically fine but too large to represent.
    #[error("The {component} component of version `{version}` is out of range")]
    ComponentOutOfRange {
        /// The offending version string.
        version: String,
        /// Which component overflowed (`major`, `minor` or `patch`).
        component: &'static str,
    },

    /// The development counter is too large to represent.
    #[error("The development counter of version `{version}` is out of range")]
    DevCounterOutOfRange {
        /// The offending version string.
        version: String,
    },

    /// Incrementing a component would overflow.
    #[error("Cannot bump {level} of version `{version}` without overflowing")]
    BumpOverflow {
        /// The version being bumped.
        version: String,
        /// The level that was requested.
        level: &'static str,
    },

    /// A level name is not one of the known bump levels.
    #[error("Unknown bump level `{name}`, expected one of: major, minor, patch, dev, none")]
    UnknownLevel {
        /// The name that was given.
        name: String,
    },
}

/// An error raised while reading, validating or writing a version file.
#[derive(thiserror::Error, Debug)]
pub enum VersionFileError {
    /// The file could not be read or written.
    #[error("Could not access version file `{}`: {source}", path.display())]
    Io {
        /// The version file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file contains nothing but whitespace.
    #[error("Version file `{}` is empty", path.display())]
    Empty {
        /// The version file.
        path: PathBuf,
    },

    /// The file (or an explicit replacement) holds a malformed version.
    #[error("{0}")]
    Invalid(#[from] ValidationError),
}
