//! Mode selection for `version2k`
//!
//! Flags are checked in a fixed order and the first one present wins; the
//! rest are ignored. This keeps the deriver free of clap types.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::cli::args::{normalize_args, Args};
use crate::deriver::Mode;

/// Literal second argument of `--version` that selects the build id
pub const BUILD_KEYWORD: &str = "build";

/// What a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No recognized mode: print usage and exit 1
    Usage,
    /// Derive and print one line
    Derive(Mode),
}

/// Pick the mode from parsed arguments
///
/// Order: version, msbuild, msdate, msbuilddate, edate, edateonly.
pub fn select_mode(args: &Args) -> Option<Mode> {
    if let Some(values) = &args.version {
        if let Some(path) = values.first() {
            return Some(Mode::Version {
                path: PathBuf::from(path),
                build_only: values.get(1).map(String::as_str) == Some(BUILD_KEYWORD),
            });
        }
    }

    if args.msbuild {
        return Some(Mode::MsBuild);
    }

    if let Some(offset) = args.msdate {
        return Some(Mode::MsDate(offset));
    }

    if let Some(date) = &args.msbuilddate {
        return Some(Mode::MsBuildDate(date.clone()));
    }

    if args.edate {
        return Some(Mode::EDate);
    }

    if args.edateonly {
        return Some(Mode::EDateOnly);
    }

    None
}

/// Interpret a full argv, program name included
///
/// # Returns
/// * `Ok(Outcome::Usage)` - For a bare invocation or when no mode flag is present
/// * `Ok(Outcome::Derive)` - The selected mode
/// * `Err(clap::Error)` - Malformed arguments; the caller should let clap report it
pub fn interpret<I, T>(argv: I) -> Result<Outcome, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = normalize_args(argv);
    if argv.len() <= 1 {
        return Ok(Outcome::Usage);
    }

    let args = Args::try_parse_from(argv)?;
    Ok(match select_mode(&args) {
        Some(mode) => Outcome::Derive(mode),
        None => Outcome::Usage,
    })
}
