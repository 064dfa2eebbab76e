//! Pure formatting functions for tool output.
//!
//! Messages carry the tool's prefix (e.g. `update:`) the way the build scripts
//! always printed them; styling is added only when printing.

use console::style;

/// `<prefix>: <message>`
pub fn format_status(prefix: &str, message: &str) -> String {
    format!("{}: {}", prefix, message)
}

/// `<prefix>: error: <message>`
pub fn format_error(prefix: &str, message: &str) -> String {
    format!("{}: error: {}", prefix, message)
}

/// `<prefix>: Searching for <tool>...`
pub fn format_searching(prefix: &str, tool: &str) -> String {
    format_status(prefix, &format!("Searching for {}...", tool))
}

/// `<prefix>: Found <location>`
pub fn format_found(prefix: &str, location: &str) -> String {
    format_status(prefix, &format!("Found {}", location))
}

/// A planned command line, as shown by dry runs
pub fn format_command(dir: &str, program: &str, args: &[&str]) -> String {
    let mut line = format!("({}) {}", dir, program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Print an error line in red to stderr.
pub fn display_error(prefix: &str, message: &str) {
    eprintln!("{}", style(format_error(prefix, message)).red());
}

/// Print a warning line in yellow to stderr.
pub fn display_warning(prefix: &str, message: &str) {
    eprintln!("{}", style(format_status(prefix, message)).yellow());
}

/// Print a status line to stdout.
pub fn display_status(prefix: &str, message: &str) {
    println!("{}", format_status(prefix, message));
}

/// Print a success line with a green checkmark.
pub fn display_success(prefix: &str, message: &str) {
    println!("{} {}", style("✓").green(), format_status(prefix, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status() {
        assert_eq!(
            format_status("update", "Updating top-level repository"),
            "update: Updating top-level repository"
        );
    }

    #[test]
    fn test_format_error() {
        assert_eq!(
            format_error("update", "Git was not found on your system!"),
            "update: error: Git was not found on your system!"
        );
    }

    #[test]
    fn test_format_dependency_search() {
        assert_eq!(format_searching("update", "Git"), "update: Searching for Git...");
        assert_eq!(format_found("update", "git"), "update: Found git");
    }

    #[test]
    fn test_format_command() {
        assert_eq!(
            format_command("mozilla", "git", &["submodule", "update"]),
            "(mozilla) git submodule update"
        );
        assert_eq!(format_command(".", "git", &[]), "(.) git");
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_status("update", "test status");
        display_success("update", "test success");
        display_warning("update", "test warning");
        display_error("update", "test error");
    }
}
