use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use buildtools::config;
use buildtools::git::{CommandGit, GitLocator, GitRunner, Platform};
use buildtools::logging;
use buildtools::sync::{run_plan, SyncPlan};
use buildtools::ui::Reporter;

const REPORTER: Reporter = Reporter::new("update");

#[derive(clap::Parser)]
#[command(
    name = "update-repos",
    about = "Check out and pull the source repositories and their submodules"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Directory the repositories are relative to [default: current directory]")]
    root: Option<PathBuf>,

    #[arg(long, help = "Show the git commands without running them")]
    dry_run: bool,

    #[arg(long, help = "Log each step")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_with_level(logging::level_for(args.verbose));

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            REPORTER.error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    REPORTER.searching("Git");
    let locator = GitLocator::for_platform(Platform::current())
        .with_search_path(std::env::var_os("PATH"));
    let binary = match locator.locate(config.tools.git.as_deref()) {
        Ok(binary) => binary,
        Err(e) => {
            REPORTER.error(&e.to_string());
            std::process::exit(1);
        }
    };
    REPORTER.found(&binary.program.display().to_string());

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let plan = SyncPlan::from_config(&root, &config.sync);
    let git = CommandGit::new(binary);

    if args.dry_run {
        REPORTER.status("Dry run, nothing will be changed:");
        for line in plan.describe(&git.program()) {
            println!("  {}", line);
        }
        return Ok(());
    }

    let report = run_plan(&plan, &git, &REPORTER);
    if !report.is_success() {
        REPORTER.error(&format!(
            "{} command(s) failed, {} repository(ies) skipped",
            report.failures.len(),
            report.skipped.len()
        ));
        std::process::exit(1);
    }

    REPORTER.success("All repositories updated");
    Ok(())
}
