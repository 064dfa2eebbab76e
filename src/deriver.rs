//! Version and build-date derivation
//!
//! [VersionStringDeriver] turns one [Mode] into one line of output. The clock is
//! read once per derivation, so a stamped version and the build day it embeds
//! always agree.

use crate::clock::Clock;
use crate::domain::{parse_build_date, BuildDay, DateFormat, VersionString};
use crate::error::Result;
use std::path::PathBuf;

/// One unit of work for the deriver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print the first line of a version file, stamping a `.0000` placeholder.
    /// With `build_only`, print just the trailing build id.
    Version { path: PathBuf, build_only: bool },
    /// Today's build day
    MsBuild,
    /// Calendar date of a build day
    MsDate(i64),
    /// Build day of a date string
    MsBuildDate(String),
    /// UTC timestamp as `YYYYMMDD.HHMM`
    EDate,
    /// UTC date as `YYYYMMDD`
    EDateOnly,
}

impl Mode {
    /// Long flag name this mode is selected by
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Version { .. } => "version",
            Mode::MsBuild => "msbuild",
            Mode::MsDate(_) => "msdate",
            Mode::MsBuildDate(_) => "msbuilddate",
            Mode::EDate => "edate",
            Mode::EDateOnly => "edateonly",
        }
    }
}

/// Derives version strings and build dates against a clock
pub struct VersionStringDeriver<C: Clock> {
    clock: C,
}

impl<C: Clock> VersionStringDeriver<C> {
    pub fn new(clock: C) -> Self {
        VersionStringDeriver { clock }
    }

    /// Produce the output line for `mode`
    ///
    /// # Returns
    /// * `Ok(String)` - The line to print, without a trailing newline
    /// * `Err` - If the version file cannot be read, the date string does not
    ///   parse, or the build day lies outside the calendar
    pub fn derive(&self, mode: &Mode) -> Result<String> {
        let now = self.clock.now();
        let today = BuildDay::from_date(now.date_naive());
        log::debug!("deriving {} at {} (build day {})", mode.name(), now, today);

        match mode {
            Mode::Version { path, build_only } => {
                let version = VersionString::read_first_line(path)?;
                if version.shape().is_none() {
                    log::warn!(
                        "{} does not look like MAJOR.MINOR.PATCH: '{}'",
                        path.display(),
                        version
                    );
                }

                let stamped = version.stamped(today);
                if *build_only {
                    Ok(stamped.build_id().to_string())
                } else {
                    Ok(stamped.to_string())
                }
            }
            Mode::MsBuild => Ok(today.to_string()),
            Mode::MsDate(offset) => {
                let date = BuildDay::new(*offset).to_date()?;
                Ok(DateFormat::Dashed.render(date))
            }
            Mode::MsBuildDate(input) => {
                let date = parse_build_date(input)?;
                Ok(BuildDay::from_date(date).to_string())
            }
            Mode::EDate => Ok(now.format("%Y%m%d.%H%M").to_string()),
            Mode::EDateOnly => Ok(now.format("%Y%m%d").to_string()),
        }
    }

    /// Today's build day according to the clock
    pub fn today(&self) -> BuildDay {
        BuildDay::from_date(self.clock.now().date_naive())
    }
}
