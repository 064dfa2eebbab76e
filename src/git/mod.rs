//! Git operations abstraction layer
//!
//! Repository sync needs only a handful of git operations. They go through the
//! [GitRunner] trait so the sync plan can be exercised without a git binary:
//!
//! - [command::CommandGit]: runs the located git executable, and inspects work
//!   trees with `git2`
//! - [mock::RecordingGit]: records calls and fails on request, for tests
//!
//! [locate::GitLocator] finds the executable for the current platform.

pub mod command;
pub mod locate;
pub mod mock;
pub mod repository;

pub use command::CommandGit;
pub use locate::{GitBinary, GitLocator, Platform};
pub use mock::RecordingGit;
pub use repository::WorkTree;

use crate::error::Result;
use std::fmt;
use std::path::Path;

/// The git subcommands the sync plan issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitCommand {
    Checkout,
    Pull,
    SubmoduleUpdate,
}

impl GitCommand {
    /// Command-line arguments for this subcommand
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            GitCommand::Checkout => &["checkout"],
            GitCommand::Pull => &["pull"],
            GitCommand::SubmoduleUpdate => &["submodule", "update"],
        }
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args().join(" "))
    }
}

/// Runs git operations against a directory
///
/// ## Error Handling
///
/// `run` returns an error when the command cannot be started or exits with a
/// non-zero status. Callers decide whether to continue.
pub trait GitRunner {
    /// Run `command` with `dir` as the working directory
    fn run(&self, dir: &Path, command: GitCommand) -> Result<()>;

    /// Whether `dir` is the top of a git work tree (including submodule checkouts)
    fn is_work_tree(&self, dir: &Path) -> bool;

    /// Names of the submodules registered in the repository at `dir`
    fn submodules(&self, dir: &Path) -> Result<Vec<String>>;

    /// How the executable is shown to the user
    fn program(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args() {
        assert_eq!(GitCommand::Checkout.args(), &["checkout"]);
        assert_eq!(GitCommand::Pull.args(), &["pull"]);
        assert_eq!(GitCommand::SubmoduleUpdate.args(), &["submodule", "update"]);
    }

    #[test]
    fn test_command_display() {
        assert_eq!(GitCommand::SubmoduleUpdate.to_string(), "git submodule update");
    }
}
