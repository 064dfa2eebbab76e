use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use buildtools::config;
use buildtools::logging;
use buildtools::make::{self, MakeEnvironment};
use buildtools::ui::Reporter;

const REPORTER: Reporter = Reporter::new("make");

// Help is left to the build driver so `-h` passes through.
#[derive(clap::Parser)]
#[command(
    name = "make-wrapper",
    about = "Run the build driver (pymake, or mozmake on tinderbox)",
    disable_help_flag = true
)]
struct Args {
    #[arg(long = "wrapper-config", help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        long = "wrapper-base-dir",
        help = "Directory driver locations are relative to [default: executable's directory]"
    )]
    base_dir: Option<PathBuf>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, help = "Arguments for the build driver")]
    make_args: Vec<OsString>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            REPORTER.error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let base_dir = match args.base_dir {
        Some(dir) => dir,
        None => {
            let exe = std::env::current_exe().context("cannot determine executable path")?;
            make::base_dir_of(&exe)
        }
    };

    let env = MakeEnvironment::from_process(base_dir);
    let invocation = match make::resolve(&env, &config.tools, &args.make_args) {
        Ok(invocation) => invocation,
        Err(e) => {
            REPORTER.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let code = make::execute(&invocation)?;
    if code != 0 {
        log::warn!("{:?} exited with code {}", invocation.driver, code);
    }
    std::process::exit(code);
}
