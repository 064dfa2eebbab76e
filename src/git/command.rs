use crate::error::{BuildToolsError, Result};
use crate::git::{GitBinary, GitCommand, GitRunner, WorkTree};
use std::path::Path;
use std::process::Command;

/// Runs the git executable as a child process
pub struct CommandGit {
    binary: GitBinary,
}

impl CommandGit {
    pub fn new(binary: GitBinary) -> Self {
        CommandGit { binary }
    }
}

impl GitRunner for CommandGit {
    fn run(&self, dir: &Path, command: GitCommand) -> Result<()> {
        log::debug!("running {} in {}", command, dir.display());

        let status = Command::new(&self.binary.program)
            .args(command.args())
            .current_dir(dir)
            .status()
            .map_err(|e| {
                BuildToolsError::process(format!(
                    "Failed to execute {} in {}: {}",
                    command,
                    dir.display(),
                    e
                ))
            })?;

        if !status.success() {
            return Err(BuildToolsError::process(format!(
                "{} in {} failed with exit code {}",
                command,
                dir.display(),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    fn is_work_tree(&self, dir: &Path) -> bool {
        match WorkTree::open(dir) {
            Ok(tree) => !tree.is_bare(),
            Err(e) => {
                log::debug!("{} is not a work tree: {}", dir.display(), e);
                false
            }
        }
    }

    fn submodules(&self, dir: &Path) -> Result<Vec<String>> {
        WorkTree::open(dir)?.submodule_names()
    }

    fn program(&self) -> String {
        self.binary.program.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_fails_to_start() {
        let git = CommandGit::new(GitBinary::new("/nonexistent/bin/git"));
        let dir = tempfile::tempdir().unwrap();

        let err = git.run(dir.path(), GitCommand::Pull).unwrap_err();
        assert!(err.to_string().contains("Failed to execute git pull"));
    }

    #[test]
    fn test_work_tree_detection() {
        let git = CommandGit::new(GitBinary::new("git"));
        let dir = tempfile::tempdir().unwrap();
        assert!(!git.is_work_tree(dir.path()));

        git2::Repository::init(dir.path()).unwrap();
        assert!(git.is_work_tree(dir.path()));
        assert!(git.submodules(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_program_display() {
        let git = CommandGit::new(GitBinary::new("git"));
        assert_eq!(git.program(), "git");
    }
}
