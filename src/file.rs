use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::VersionFileError,
    level::BumpLevel,
    scheme::{BumpResult, Scheme},
};

/// The file name used when none is given.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// A plain text file holding a single version string.
///
/// Surrounding whitespace is ignored when reading. Writing stores the version followed by a
/// newline. The only ways to write are [`bump`](Self::bump) and [`set`](Self::set), so a file is
/// only ever written after its new contents have been fully validated:
///
/// ```compile_fail
/// use devver::VersionFile;
///
/// VersionFile::default().write("not a version").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    path: PathBuf,
}

impl Default for VersionFile {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE)
    }
}

impl VersionFile {
    /// Creates a handle to the version file at `path`. Nothing is read until asked.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the version, trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - If the file cannot be read, returns a [`VersionFileError::Io`].
    /// - If the file holds only whitespace, returns a [`VersionFileError::Empty`].
    pub fn read(&self) -> Result<String, VersionFileError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| VersionFileError::Io {
            path: self.path.clone(),
            source,
        })?;
        let version = contents.trim();
        if version.is_empty() {
            return Err(VersionFileError::Empty {
                path: self.path.clone(),
            });
        }
        debug!(path = %self.path.display(), version, "read version file");
        Ok(version.to_owned())
    }

    /// Writes `version` and a trailing newline, replacing the file's contents. The version is
    /// written as given.
    fn write(&self, version: &str) -> Result<(), VersionFileError> {
        fs::write(&self.path, format!("{version}\n")).map_err(|source| VersionFileError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), version, "wrote version file");
        Ok(())
    }

    /// Bumps the stored version with [`Scheme::bump_with_dev`] and writes back its
    /// [`new_version`](BumpResult::new_version).
    ///
    /// If the stored version is malformed, the file is left untouched.
    pub fn bump<S: Scheme + ?Sized>(
        &self,
        scheme: &S,
        level: BumpLevel,
        is_dev: bool,
    ) -> Result<BumpResult, VersionFileError> {
        let current = self.read()?;
        let result = scheme.bump_with_dev(&current, level, is_dev)?;
        self.write(&result.new_version)?;
        Ok(result)
    }

    /// Replaces the stored version with `version` after validating it. No bump is applied.
    ///
    /// If `version` is malformed, the file is left untouched.
    pub fn set<S: Scheme + ?Sized>(
        &self,
        scheme: &S,
        version: &str,
    ) -> Result<(), VersionFileError> {
        scheme.validate(version)?;
        self.write(version)
    }
}
