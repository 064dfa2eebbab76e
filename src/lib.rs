pub mod cli;
pub mod clock;
pub mod config;
pub mod deriver;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod make;
pub mod sync;
pub mod ui;

pub use error::{BuildToolsError, Result};
