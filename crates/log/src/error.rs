//! Logger errors

/// Errors raised while configuring the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The filter directive string could not be parsed.
    #[error("invalid log filter {0}")]
    Filter(String),

    /// The output format name is unknown.
    #[error("unknown log format '{0}' (expected pretty, compact or json)")]
    Format(String),

    /// A global subscriber was already installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}

/// Result alias for logger operations.
pub type LogResult<T> = Result<T, LogError>;
