use thiserror::Error;

/// Unified error type for buildtools operations
#[derive(Error, Debug)]
pub enum BuildToolsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Date out of range: {0}")]
    DateRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("{0} was not found on your system!")]
    Dependency(String),

    #[error("Process error: {0}")]
    Process(String),
}

/// Convenience type alias for Results in buildtools
pub type Result<T> = std::result::Result<T, BuildToolsError>;

impl BuildToolsError {
    /// Create a date parsing error with context
    pub fn date_parse(msg: impl Into<String>) -> Self {
        BuildToolsError::DateParse(msg.into())
    }

    /// Create a date range error with context
    pub fn date_range(msg: impl Into<String>) -> Self {
        BuildToolsError::DateRange(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BuildToolsError::Config(msg.into())
    }

    /// Create a missing-dependency error naming the tool
    pub fn dependency(tool: impl Into<String>) -> Self {
        BuildToolsError::Dependency(tool.into())
    }

    /// Create a process error with context
    pub fn process(msg: impl Into<String>) -> Self {
        BuildToolsError::Process(msg.into())
    }
}
