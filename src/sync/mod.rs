//! Repository synchronization
//!
//! Builds an ordered [SyncPlan] from configuration and runs it through a
//! [GitRunner]: each configured repository is checked out and pulled, then the
//! root's submodules are updated, then the root itself is checked out and
//! pulled. A failing command is reported and the plan carries on.

use crate::config::SyncConfig;
use crate::git::{GitCommand, GitRunner};
use crate::ui::{format_command, Reporter};
use std::path::{Path, PathBuf};

/// What a sync target updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Repository,
    Submodules,
    TopLevel,
}

/// One directory and the git commands to run there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub kind: TargetKind,
    pub label: String,
    pub dir: PathBuf,
    pub commands: Vec<GitCommand>,
}

/// Ordered list of sync targets under a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    pub root: PathBuf,
    pub targets: Vec<SyncTarget>,
}

impl SyncPlan {
    /// Build the plan for `root` from configuration
    pub fn from_config(root: &Path, config: &SyncConfig) -> Self {
        let mut targets = Vec::new();

        for repository in &config.repositories {
            let name = repository
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| repository.display().to_string());

            targets.push(SyncTarget {
                kind: TargetKind::Repository,
                label: format!("Updating {} repository", name),
                dir: root.join(repository),
                commands: vec![GitCommand::Checkout, GitCommand::Pull],
            });
        }

        if config.submodules {
            targets.push(SyncTarget {
                kind: TargetKind::Submodules,
                label: "Updating submodules".to_string(),
                dir: root.to_path_buf(),
                commands: vec![GitCommand::SubmoduleUpdate],
            });
        }

        if config.top_level {
            targets.push(SyncTarget {
                kind: TargetKind::TopLevel,
                label: "Updating top-level repository".to_string(),
                dir: root.to_path_buf(),
                commands: vec![GitCommand::Checkout, GitCommand::Pull],
            });
        }

        SyncPlan {
            root: root.to_path_buf(),
            targets,
        }
    }

    /// Command lines the plan would run, for dry runs
    pub fn describe(&self, program: &str) -> Vec<String> {
        self.targets
            .iter()
            .flat_map(|target| {
                let dir = target
                    .dir
                    .strip_prefix(&self.root)
                    .ok()
                    .filter(|rel| !rel.as_os_str().is_empty())
                    .unwrap_or(Path::new("."))
                    .display()
                    .to_string();
                target
                    .commands
                    .iter()
                    .map(move |command| format_command(&dir, program, command.args()))
            })
            .collect()
    }
}

/// A command that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub label: String,
    pub command: GitCommand,
    pub message: String,
}

/// Outcome of running a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Labels of targets whose commands all succeeded
    pub completed: Vec<String>,
    /// Labels of targets skipped because their directory is not a work tree
    pub skipped: Vec<String>,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    /// True when nothing failed or was skipped
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

/// Run every target of `plan` in order
pub fn run_plan<G: GitRunner>(plan: &SyncPlan, git: &G, reporter: &Reporter) -> SyncReport {
    let mut report = SyncReport::default();

    for target in &plan.targets {
        reporter.status(&target.label);

        if !git.is_work_tree(&target.dir) {
            reporter.warning(&format!(
                "{} is not a git repository, skipping",
                target.dir.display()
            ));
            report.skipped.push(target.label.clone());
            continue;
        }

        if target.kind == TargetKind::Submodules {
            match git.submodules(&target.dir) {
                Ok(names) if !names.is_empty() => {
                    log::info!("submodules: {}", names.join(", "));
                }
                Ok(_) => log::info!("no submodules registered in {}", target.dir.display()),
                Err(e) => log::warn!("could not list submodules: {}", e),
            }
        }

        let mut target_ok = true;
        for command in &target.commands {
            if let Err(e) = git.run(&target.dir, *command) {
                reporter.warning(&e.to_string());
                report.failures.push(SyncFailure {
                    label: target.label.clone(),
                    command: *command,
                    message: e.to_string(),
                });
                target_ok = false;
            }
        }

        if target_ok {
            report.completed.push(target.label.clone());
        }
    }

    report
}
