//! Command-line surface of `version2k`
//!
//! - `args` - clap definitions and argv normalization
//! - `orchestration` - mode selection and execution, independent of clap

pub mod args;
pub mod orchestration;

pub use args::{normalize_args, Args};
pub use orchestration::{interpret, select_mode, Outcome};
