//! User interface module - prefixed status reporting.
//!
//! - `formatter` - Pure formatting and printing functions
//! - [Reporter] - Binds a tool prefix so call sites only pass the message

pub mod formatter;

pub use formatter::{
    display_error, display_status, display_success, display_warning, format_command,
    format_error, format_found, format_searching, format_status,
};

/// Prints messages under a fixed tool prefix
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    prefix: &'static str,
}

impl Reporter {
    pub const fn new(prefix: &'static str) -> Self {
        Reporter { prefix }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn status(&self, message: &str) {
        display_status(self.prefix, message);
    }

    pub fn success(&self, message: &str) {
        display_success(self.prefix, message);
    }

    pub fn warning(&self, message: &str) {
        display_warning(self.prefix, message);
    }

    pub fn error(&self, message: &str) {
        display_error(self.prefix, message);
    }

    /// `Searching for <tool>...`
    pub fn searching(&self, tool: &str) {
        println!("{}", format_searching(self.prefix, tool));
    }

    /// `Found <location>`
    pub fn found(&self, location: &str) {
        println!("{}", format_found(self.prefix, location));
    }
}
