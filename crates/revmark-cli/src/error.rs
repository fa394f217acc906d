//! Error types for revmark-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from revmark-tags
    #[error(transparent)]
    Tags(#[from] revmark_tags::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Follow-up advice for errors caused by the tag settings.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Tags(e) if e.is_config() => {
                Some("run 'revmark languages' to see the configured comment syntax")
            }
            _ => None,
        }
    }
}
