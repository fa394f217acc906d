//! Error types for revmark-tags

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] revmark_fs::Error),

    #[error("Invalid tag grammar: {message}")]
    InvalidGrammar { message: String },

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("No comment syntax configured for {subject}")]
    UnsupportedLanguage { subject: String },

    #[error("Invalid line range {start}..={end} for a document with {line_count} lines")]
    InvalidRange {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("Invalid tag identifier {identifier:?}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn grammar(message: impl Into<String>) -> Self {
        Self::InvalidGrammar {
            message: message.into(),
        }
    }

    /// Whether this error stems from configuration rather than file access or input.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidGrammar { .. } | Self::ConfigNotFound { .. } | Self::UnsupportedLanguage { .. }
        )
    }
}
