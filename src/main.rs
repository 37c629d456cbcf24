use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use devver::{default_scheme, BumpLevel, VersionFile, VersionFileError, DEFAULT_VERSION_FILE};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    VersionFile(#[from] VersionFileError),
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Patch,
    Dev,
    None,
}

impl LevelArg {
    fn to_bump_level(self) -> BumpLevel {
        match self {
            LevelArg::Major => BumpLevel::Major,
            LevelArg::Minor => BumpLevel::Minor,
            LevelArg::Patch => BumpLevel::Patch,
            LevelArg::Dev => BumpLevel::Dev,
            LevelArg::None => BumpLevel::None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log what is being read, computed and written to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
enum Commands {
    /// Validates a version string. Prints `true` and exits 0 if it is valid, otherwise prints
    /// `false` and exits 1.
    Valid {
        /// The version string to validate
        #[arg(value_name = "VERSION")]
        version_str: String,
    },

    /// Bumps the version stored in a version file.
    ///
    /// By default a dev version is written: the dev counter is incremented when the numeric
    /// version is unchanged, and reset to 0 otherwise. Use `--release` to write a plain version.
    Bump {
        /// The file holding the version
        #[arg(short = 'f', long, default_value = DEFAULT_VERSION_FILE)]
        version_file: PathBuf,

        /// The level to bump before the dev suffix is applied
        #[arg(short, long, value_enum, default_value_t = LevelArg::Dev)]
        level: LevelArg,

        /// Write a release version (no dev suffix)
        #[arg(long)]
        release: bool,
    },

    /// Sets a version file to an explicit version. The version is validated but not bumped.
    Set {
        /// The version to write
        #[arg(value_name = "VERSION")]
        version_str: String,

        /// The file holding the version
        #[arg(short = 'f', long, default_value = DEFAULT_VERSION_FILE)]
        version_file: PathBuf,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "devver=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    let scheme = default_scheme();
    match cli.command {
        Commands::Valid { version_str } => Ok(match scheme.validate(&version_str) {
            Ok(()) => ("true".to_string(), 0),
            Err(e) => {
                tracing::debug!(error = %e, "validation failed");
                ("false".to_string(), 1)
            }
        }),
        Commands::Bump {
            version_file,
            level,
            release,
        } => {
            let file = VersionFile::new(version_file);
            let result = file.bump(scheme, level.to_bump_level(), !release)?;
            Ok((
                format!(
                    "Updated {} to {}",
                    file.path().display(),
                    result.new_version
                ),
                0,
            ))
        }
        Commands::Set {
            version_str,
            version_file,
        } => {
            let file = VersionFile::new(version_file);
            file.set(scheme, &version_str)?;
            Ok((format!("Set {} to {}", file.path().display(), version_str), 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bump_defaults() {
        let cli = Cli::try_parse_from(["devver", "bump"]).unwrap();
        match cli.command {
            Commands::Bump {
                version_file,
                level,
                release,
            } => {
                assert_eq!(PathBuf::from("VERSION"), version_file);
                assert_eq!(LevelArg::Dev, level);
                assert!(!release);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(Cli::try_parse_from(["devver", "bump", "--level", "huge"]).is_err());
    }

    #[test]
    fn test_valid() {
        let cli = Cli::try_parse_from(["devver", "valid", "1.2.3-dev.4"]).unwrap();
        assert_eq!(("true".to_string(), 0), do_work(cli).unwrap());

        let cli = Cli::try_parse_from(["devver", "valid", "1.2.3.devx"]).unwrap();
        assert_eq!(("false".to_string(), 1), do_work(cli).unwrap());
    }

    #[test]
    fn test_bump_release() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "1.2.3.dev4\n").unwrap();

        let cli = Cli::try_parse_from([
            "devver",
            "bump",
            "--version-file",
            path.to_str().unwrap(),
            "--level",
            "patch",
            "--release",
        ])
        .unwrap();
        let (output, code) = do_work(cli).unwrap();

        assert_eq!(0, code);
        assert!(output.ends_with(" to 1.2.4"));
        assert_eq!("1.2.4\n", fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn test_set_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "1.2.3\n").unwrap();

        let cli = Cli::try_parse_from([
            "devver",
            "set",
            "1.2.3+",
            "-f",
            path.to_str().unwrap(),
        ])
        .unwrap();

        assert!(matches!(
            do_work(cli),
            Err(CliError::VersionFile(VersionFileError::Invalid(_)))
        ));
        assert_eq!("1.2.3\n", fs::read_to_string(&path).unwrap());
    }
}
