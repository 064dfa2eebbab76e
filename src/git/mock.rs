use crate::error::{BuildToolsError, Result};
use crate::git::{GitCommand, GitRunner};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock runner for testing without a git executable
///
/// Every `run` call is recorded in order. Directories are work trees only when
/// registered with [RecordingGit::add_work_tree].
pub struct RecordingGit {
    calls: Mutex<Vec<(PathBuf, GitCommand)>>,
    work_trees: HashSet<PathBuf>,
    submodules: HashMap<PathBuf, Vec<String>>,
    failures: HashSet<(PathBuf, GitCommand)>,
}

impl RecordingGit {
    /// Create a runner with no work trees
    pub fn new() -> Self {
        RecordingGit {
            calls: Mutex::new(Vec::new()),
            work_trees: HashSet::new(),
            submodules: HashMap::new(),
            failures: HashSet::new(),
        }
    }

    /// Treat `dir` as a work tree
    pub fn add_work_tree(&mut self, dir: impl Into<PathBuf>) {
        self.work_trees.insert(dir.into());
    }

    /// Register submodules for the work tree at `dir`
    pub fn set_submodules(&mut self, dir: impl Into<PathBuf>, names: &[&str]) {
        self.submodules
            .insert(dir.into(), names.iter().map(|s| s.to_string()).collect());
    }

    /// Make `command` fail when run in `dir`
    pub fn fail_on(&mut self, dir: impl Into<PathBuf>, command: GitCommand) {
        self.failures.insert((dir.into(), command));
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<(PathBuf, GitCommand)> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for RecordingGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for RecordingGit {
    fn run(&self, dir: &Path, command: GitCommand) -> Result<()> {
        match self.calls.lock() {
            Ok(mut calls) => calls.push((dir.to_path_buf(), command)),
            Err(poisoned) => poisoned.into_inner().push((dir.to_path_buf(), command)),
        }

        if self.failures.contains(&(dir.to_path_buf(), command)) {
            return Err(BuildToolsError::process(format!(
                "{} in {} failed with exit code 1",
                command,
                dir.display()
            )));
        }
        Ok(())
    }

    fn is_work_tree(&self, dir: &Path) -> bool {
        self.work_trees.contains(dir)
    }

    fn submodules(&self, dir: &Path) -> Result<Vec<String>> {
        Ok(self.submodules.get(dir).cloned().unwrap_or_default())
    }

    fn program(&self) -> String {
        "git".to_string()
    }
}
