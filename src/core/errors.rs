use std::path::PathBuf;

/// All domain errors for the monitor client.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error(
        "Network error: {reason}\n\n  \
         The backend did not answer. Check that it is running and that\n  \
         the API URL is correct: ethics-monitor config show"
    )]
    NetworkError { reason: String },

    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error(
        "Unauthorized: your session has expired or was revoked\n\n  \
         Log in again: ethics-monitor login"
    )]
    Unauthorized,

    #[error("Login failed: {reason}")]
    LoginFailed { reason: String },

    #[error("Parse error: {detail}")]
    ParseError { detail: String },

    #[error(
        "Not logged in\n\n  \
         Run 'ethics-monitor login' first."
    )]
    NotAuthenticated,

    #[error(
        "Access denied: {view} requires the admin role\n\n  \
         Ask an administrator to grant your account the 'admin' role."
    )]
    Forbidden { view: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Invalid input: {detail}")]
    InvalidInput { detail: String },

    #[error("Session storage error at {path}: {detail}")]
    StorageError { path: PathBuf, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MonitorError {
    /// Message suitable for a one-line diagnostic, without the hint block.
    pub fn summary(&self) -> String {
        self.to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MonitorError>;
