use crate::error::Result;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Read-only view of a git work tree
pub struct WorkTree {
    repo: Git2Repo,
}

impl WorkTree {
    /// Open the repository whose work tree is exactly `path`
    ///
    /// Unlike discovery this does not walk up to parent directories, so a plain
    /// subdirectory of a repository is rejected. Submodule checkouts, whose
    /// `.git` is a file, are accepted.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(WorkTree { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        WorkTree { repo }
    }

    /// Names of registered submodules, sorted
    pub fn submodule_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .repo
            .submodules()?
            .iter()
            .map(|submodule| match submodule.name() {
                Some(name) => name.to_string(),
                None => submodule.path().display().to_string(),
            })
            .collect();

        names.sort();
        Ok(names)
    }

    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }
}
