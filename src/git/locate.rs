//! Discovery of the git executable
//!
//! Order: configured path, then the platform's well-known install locations,
//! then the search path.

use crate::error::{BuildToolsError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Platforms with distinct git install conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// The platform this binary was built for
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }

    /// File name of the git executable on this platform
    pub fn executable_name(&self) -> &'static str {
        match self {
            Platform::Windows => "git.exe",
            _ => "git",
        }
    }
}

/// A well-known location: the file that must exist, and what to invoke when it does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub probe: PathBuf,
    pub invoke: PathBuf,
}

impl Candidate {
    pub fn new(probe: impl Into<PathBuf>, invoke: impl Into<PathBuf>) -> Self {
        Candidate {
            probe: probe.into(),
            invoke: invoke.into(),
        }
    }

    /// A location invoked by its own path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Candidate::new(path.clone(), path)
    }
}

/// The resolved git executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitBinary {
    pub program: PathBuf,
}

impl GitBinary {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        GitBinary {
            program: program.into(),
        }
    }
}

/// Finds git using platform conventions
#[derive(Debug, Clone)]
pub struct GitLocator {
    platform: Platform,
    candidates: Vec<Candidate>,
    search_path: Option<OsString>,
}

impl GitLocator {
    /// Locator with the well-known locations of `platform` and no search path
    pub fn for_platform(platform: Platform) -> Self {
        let candidates = match platform {
            Platform::Windows => vec![
                Candidate::at("c:/Program Files/Git/bin/git.exe"),
                Candidate::at("c:/Program Files (x86)/Git/bin/git.exe"),
            ],
            // A system install is on PATH, so invoke it by name
            Platform::Linux => vec![Candidate::new("/usr/bin/git", "git")],
            Platform::Other => Vec::new(),
        };

        GitLocator {
            platform,
            candidates,
            search_path: None,
        }
    }

    /// Replace the well-known locations
    pub fn with_candidates(mut self, candidates: Vec<Candidate>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Directories to search after the well-known locations, in `PATH` syntax
    pub fn with_search_path(mut self, search_path: Option<OsString>) -> Self {
        self.search_path = search_path;
        self
    }

    /// Resolve the git executable
    ///
    /// # Arguments
    /// * `configured` - Explicit path from configuration; used as-is when it exists
    ///
    /// # Returns
    /// * `Ok(GitBinary)` - The executable to invoke
    /// * `Err` - If a configured path does not exist, or nothing was found
    pub fn locate(&self, configured: Option<&Path>) -> Result<GitBinary> {
        if let Some(path) = configured {
            if path.is_file() {
                log::debug!("using configured git at {}", path.display());
                return Ok(GitBinary::new(path));
            }
            return Err(BuildToolsError::config(format!(
                "configured git {} does not exist",
                path.display()
            )));
        }

        for candidate in &self.candidates {
            if candidate.probe.exists() {
                log::debug!("found git at {}", candidate.probe.display());
                return Ok(GitBinary::new(&candidate.invoke));
            }
        }

        if let Some(search_path) = &self.search_path {
            let name = self.platform.executable_name();
            for dir in std::env::split_paths(search_path) {
                let path = dir.join(name);
                if path.is_file() {
                    log::debug!("found git on search path at {}", path.display());
                    return Ok(GitBinary::new(path));
                }
            }
        }

        Err(BuildToolsError::dependency("Git"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_platform_from_os() {
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("macos"), Platform::Other);
        assert_eq!(Platform::Windows.executable_name(), "git.exe");
        assert_eq!(Platform::Linux.executable_name(), "git");
    }

    #[test]
    fn test_well_known_locations() {
        let windows = GitLocator::for_platform(Platform::Windows);
        assert_eq!(windows.candidates.len(), 2);
        assert!(windows.candidates[0].probe.ends_with("Git/bin/git.exe"));

        let linux = GitLocator::for_platform(Platform::Linux);
        assert_eq!(linux.candidates, vec![Candidate::new("/usr/bin/git", "git")]);
    }

    #[test]
    fn test_configured_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let git = dir.path().join("git");
        fs::write(&git, "").unwrap();

        let locator = GitLocator::for_platform(Platform::Other)
            .with_candidates(vec![Candidate::new(dir.path(), "other-git")]);
        assert_eq!(locator.locate(Some(&git)).unwrap(), GitBinary::new(&git));
    }

    #[test]
    fn test_missing_configured_path_is_an_error() {
        let locator = GitLocator::for_platform(Platform::Other);
        let err = locator
            .locate(Some(Path::new("/nonexistent/bin/git")))
            .unwrap_err();
        assert!(err.to_string().contains("configured git"));
    }

    #[test]
    fn test_first_existing_candidate_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present-git");
        fs::write(&present, "").unwrap();

        let locator = GitLocator::for_platform(Platform::Other).with_candidates(vec![
            Candidate::at(dir.path().join("absent-git")),
            Candidate::new(&present, "git"),
        ]);
        assert_eq!(locator.locate(None).unwrap(), GitBinary::new("git"));
    }

    #[test]
    fn test_search_path_fallback() {
        let empty = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let git = bin.path().join("git");
        fs::write(&git, "").unwrap();

        let search = std::env::join_paths([empty.path(), bin.path()]).unwrap();
        let locator = GitLocator::for_platform(Platform::Other).with_search_path(Some(search));
        assert_eq!(locator.locate(None).unwrap(), GitBinary::new(&git));
    }

    #[test]
    fn test_not_found() {
        let empty = tempfile::tempdir().unwrap();
        let locator = GitLocator::for_platform(Platform::Other)
            .with_search_path(Some(empty.path().as_os_str().to_os_string()));
        let err = locator.locate(None).unwrap_err();
        assert_eq!(err.to_string(), "Git was not found on your system!");
    }
}
