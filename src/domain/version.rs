use crate::domain::{BuildDay, VersionSuffix};
use crate::error::Result;
use regex::Regex;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Width of a build id that carries a channel qualifier (e.g. "6710a1")
pub const QUALIFIED_BUILD_ID_WIDTH: usize = 6;

/// Width of a plain numeric build id (e.g. "1234")
pub const PLAIN_BUILD_ID_WIDTH: usize = 4;

/// A version line such as `52.9.0000` or `52.9.6710a1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString {
    text: String,
}

/// Numeric components of a version string, when it has the usual shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionShape {
    pub major: u32,
    pub minor: u32,
    pub patch: String,
    pub tag: String,
}

impl VersionString {
    /// Wrap a version line
    pub fn new(text: impl Into<String>) -> Self {
        VersionString { text: text.into() }
    }

    /// Read the first line of a version file
    ///
    /// Only the first line is consumed. The line terminator is dropped; an empty
    /// file yields an empty version string.
    pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;

        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(VersionString::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn suffix(&self) -> Option<VersionSuffix> {
        VersionSuffix::detect(&self.text)
    }

    /// Replace a trailing `.0000` with `.<build day>a1`
    ///
    /// Versions without the placeholder are returned unchanged.
    pub fn stamped(&self, today: BuildDay) -> VersionString {
        match self.suffix() {
            Some(VersionSuffix::Placeholder) => {
                let stem = &self.text[..self.text.len() - VersionSuffix::Placeholder.literal().len()];
                VersionString::new(format!(
                    "{}.{}{}",
                    stem,
                    today,
                    VersionSuffix::Alpha.literal()
                ))
            }
            _ => self.clone(),
        }
    }

    /// Trailing build id: 6 characters after a channel qualifier, 4 otherwise
    ///
    /// Strings shorter than the width are returned whole.
    pub fn build_id(&self) -> &str {
        let width = match self.suffix() {
            Some(suffix) if suffix.is_qualifier() => QUALIFIED_BUILD_ID_WIDTH,
            _ => PLAIN_BUILD_ID_WIDTH,
        };
        last_chars(&self.text, width)
    }

    /// Split into `MAJOR.MINOR.PATCH[TAG]` when the string has that shape
    pub fn shape(&self) -> Option<VersionShape> {
        let re = Regex::new(r"^(\d+)\.(\d+)\.(\d+)(.*)$").ok()?;
        let caps = re.captures(&self.text)?;

        Some(VersionShape {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].to_string(),
            tag: caps[4].to_string(),
        })
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn last_chars(text: &str, count: usize) -> &str {
    match text.char_indices().rev().nth(count.saturating_sub(1)) {
        Some((index, _)) if count > 0 => &text[index..],
        Some(_) => "",
        None => text,
    }
}
