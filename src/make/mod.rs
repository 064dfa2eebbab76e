//! Build-driver dispatch
//!
//! The wrapper runs `mozmake.exe` on tinderbox build slaves when it is present,
//! and `make.py` from pymake through the python interpreter otherwise. The
//! process environment is captured once into a [MakeEnvironment]; [resolve]
//! turns it into a [MakeInvocation] without looking at anything else.

use crate::config::ToolsConfig;
use crate::error::{BuildToolsError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable that marks a tinderbox build slave
pub const TINDERBOX_VAR: &str = "TINDERBOX_OUTPUT";

/// Which driver an invocation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Mozmake,
    Pymake,
}

/// Inputs that decide which driver runs and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeEnvironment {
    /// Directory the default driver locations are relative to
    pub base_dir: PathBuf,
    /// Running on a tinderbox build slave
    pub tinderbox: bool,
    /// Value of `SHELL`, if set
    pub shell: Option<String>,
}

impl MakeEnvironment {
    /// Capture the current process environment
    pub fn from_process(base_dir: PathBuf) -> Self {
        MakeEnvironment {
            base_dir,
            tinderbox: std::env::var_os(TINDERBOX_VAR).is_some(),
            shell: std::env::var("SHELL").ok(),
        }
    }

    /// Default location of `mozmake.exe`
    pub fn mozmake_path(&self) -> PathBuf {
        self.base_dir.join("..").join("..").join("mozmake.exe")
    }

    /// Default location of pymake's `make.py`
    pub fn pymake_path(&self) -> PathBuf {
        self.base_dir
            .join("..")
            .join("..")
            .join("platform")
            .join("build")
            .join("pymake")
            .join("make.py")
    }
}

/// A fully resolved command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeInvocation {
    pub driver: Driver,
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

/// Decide which driver to run for `args`
///
/// # Returns
/// * `Ok(MakeInvocation)` - mozmake when on tinderbox and it exists, pymake otherwise
/// * `Err` - If pymake's `make.py` cannot be found
pub fn resolve(
    env: &MakeEnvironment,
    tools: &ToolsConfig,
    args: &[OsString],
) -> Result<MakeInvocation> {
    if env.tinderbox {
        let mozmake = tools.mozmake.clone().unwrap_or_else(|| env.mozmake_path());
        if mozmake.exists() {
            let mut mozmake_args = args.to_vec();
            if let Some(shell) = shell_override(env.shell.as_deref()) {
                mozmake_args.push(OsString::from(shell));
            }

            return Ok(MakeInvocation {
                driver: Driver::Mozmake,
                program: mozmake,
                args: mozmake_args,
            });
        }
        log::debug!("{} not found, falling back to pymake", mozmake.display());
    }

    let pymake = tools.pymake.clone().unwrap_or_else(|| env.pymake_path());
    if !pymake.exists() {
        return Err(BuildToolsError::dependency(format!(
            "Pymake ({})",
            pymake.display()
        )));
    }

    let mut pymake_args = vec![pymake.into_os_string()];
    pymake_args.extend(args.iter().cloned());

    Ok(MakeInvocation {
        driver: Driver::Pymake,
        program: PathBuf::from(&tools.python),
        args: pymake_args,
    })
}

/// `SHELL=<shell>.exe` when a shell is set without an `.exe` extension
pub fn shell_override(shell: Option<&str>) -> Option<String> {
    match shell {
        Some(shell) if !shell.is_empty() && !shell.to_lowercase().ends_with(".exe") => {
            Some(format!("SHELL={}.exe", shell))
        }
        _ => None,
    }
}

/// Run an invocation and return the child's exit code
pub fn execute(invocation: &MakeInvocation) -> Result<i32> {
    log::info!(
        "running {:?}: {} {:?}",
        invocation.driver,
        invocation.program.display(),
        invocation.args
    );

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .map_err(|e| {
            BuildToolsError::process(format!(
                "Failed to execute {}: {}",
                invocation.program.display(),
                e
            ))
        })?;

    // Killed by a signal: no code to forward
    Ok(status.code().unwrap_or(1))
}

/// Directory containing `exe`, used as the default [MakeEnvironment::base_dir]
pub fn base_dir_of(exe: &Path) -> PathBuf {
    exe.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // Lays out <root>/a/b as the base dir, with drivers two levels up
    fn layout(with_mozmake: bool, with_pymake: bool) -> (tempfile::TempDir, MakeEnvironment) {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("a").join("b");
        fs::create_dir_all(&base).unwrap();

        if with_mozmake {
            fs::write(root.path().join("mozmake.exe"), "").unwrap();
        }
        if with_pymake {
            let dir = root.path().join("platform/build/pymake");
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("make.py"), "").unwrap();
        }

        let env = MakeEnvironment {
            base_dir: base,
            tinderbox: false,
            shell: None,
        };
        (root, env)
    }

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_pymake_invocation() {
        let (_root, env) = layout(false, true);
        let invocation = resolve(&env, &ToolsConfig::default(), &args(&["-C", "obj", "all"])).unwrap();

        assert_eq!(invocation.driver, Driver::Pymake);
        assert_eq!(invocation.program, PathBuf::from("python"));
        assert!(PathBuf::from(&invocation.args[0]).ends_with("pymake/make.py"));
        assert_eq!(&invocation.args[1..], &args(&["-C", "obj", "all"])[..]);
    }

    #[test]
    fn test_pymake_missing() {
        let (_root, env) = layout(false, false);
        let err = resolve(&env, &ToolsConfig::default(), &[]).unwrap_err();
        assert!(err.to_string().starts_with("Pymake"));
        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn test_mozmake_on_tinderbox() {
        let (_root, mut env) = layout(true, true);
        env.tinderbox = true;
        env.shell = Some("/bin/sh".to_string());

        let invocation = resolve(&env, &ToolsConfig::default(), &args(&["all"])).unwrap();
        assert_eq!(invocation.driver, Driver::Mozmake);
        assert!(invocation.program.ends_with("mozmake.exe"));
        assert_eq!(invocation.args, args(&["all", "SHELL=/bin/sh.exe"]));
    }

    #[test]
    fn test_mozmake_ignored_off_tinderbox() {
        let (_root, env) = layout(true, true);
        let invocation = resolve(&env, &ToolsConfig::default(), &[]).unwrap();
        assert_eq!(invocation.driver, Driver::Pymake);
    }

    #[test]
    fn test_tinderbox_without_mozmake_falls_back() {
        let (_root, mut env) = layout(false, true);
        env.tinderbox = true;
        let invocation = resolve(&env, &ToolsConfig::default(), &[]).unwrap();
        assert_eq!(invocation.driver, Driver::Pymake);
    }

    #[test]
    fn test_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let make_py = dir.path().join("make.py");
        fs::write(&make_py, "").unwrap();

        let env = MakeEnvironment {
            base_dir: PathBuf::from("/nonexistent"),
            tinderbox: false,
            shell: None,
        };
        let tools = ToolsConfig {
            python: "python2.7".to_string(),
            pymake: Some(make_py.clone()),
            ..ToolsConfig::default()
        };

        let invocation = resolve(&env, &tools, &[]).unwrap();
        assert_eq!(invocation.program, PathBuf::from("python2.7"));
        assert_eq!(invocation.args, vec![make_py.into_os_string()]);
    }

    #[test]
    fn test_shell_override() {
        assert_eq!(shell_override(Some("/bin/bash")), Some("SHELL=/bin/bash.exe".to_string()));
        assert_eq!(shell_override(Some("C:/msys/bin/sh.EXE")), None);
        assert_eq!(shell_override(Some("")), None);
        assert_eq!(shell_override(None), None);
    }

    #[test]
    fn test_base_dir_of() {
        assert_eq!(base_dir_of(Path::new("/opt/tools/make-wrapper")), PathBuf::from("/opt/tools"));
    }

    #[test]
    fn test_execute_missing_program() {
        let invocation = MakeInvocation {
            driver: Driver::Pymake,
            program: PathBuf::from("/nonexistent/python"),
            args: vec![],
        };
        assert!(execute(&invocation).is_err());
    }
}
