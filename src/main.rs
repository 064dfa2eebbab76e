use anyhow::{Context, Result};

use buildtools::cli::{self, Args, Outcome};
use buildtools::clock::SystemClock;
use buildtools::deriver::VersionStringDeriver;
use buildtools::logging;

fn main() -> Result<()> {
    logging::init();

    let outcome = match cli::interpret(std::env::args_os()) {
        Ok(outcome) => outcome,
        Err(e) => e.exit(),
    };

    let mode = match outcome {
        Outcome::Derive(mode) => mode,
        Outcome::Usage => {
            print!("{}", Args::help_text());
            std::process::exit(1);
        }
    };

    let deriver = VersionStringDeriver::new(SystemClock);
    let line = deriver
        .derive(&mode)
        .with_context(|| format!("--{} failed", mode.name()))?;

    println!("{}", line);
    Ok(())
}
