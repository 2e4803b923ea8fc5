use std::path::PathBuf;
use thiserror::Error;

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Errors raised while loading or resolving a token dictionary.
///
/// Every variant is fatal for a build: nothing is written once one of these
/// is returned.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Token source could not be read
    #[error("Failed to read token source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Token source is not valid JSON
    #[error("Token source {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Token source parsed, but its root is not an object
    #[error("Token source {} must contain a JSON object at the root", path.display())]
    NotAnObject { path: PathBuf },

    /// A token definition has an unusable shape
    #[error("Invalid token '{token}' in {}: {reason}", file.display())]
    InvalidToken {
        file: PathBuf,
        token: String,
        reason: String,
    },

    /// A `{reference}` names a path that is not in the dictionary
    #[error("Token '{token}' references unknown token '{reference}'")]
    MissingReference { token: String, reference: String },

    /// References form a cycle
    #[error("Circular token reference: {chain}")]
    CircularReference { chain: String },
}

impl DictionaryError {
    /// Create an invalid token error
    pub fn invalid_token(
        file: impl Into<PathBuf>,
        token: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidToken {
            file: file.into(),
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing reference error
    pub fn missing_reference(token: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::MissingReference {
            token: token.into(),
            reference: reference.into(),
        }
    }

    /// True for errors caused by the source files themselves (as opposed to
    /// reference resolution over an otherwise well-formed dictionary).
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::Json { .. }
                | Self::NotAnObject { .. }
                | Self::InvalidToken { .. }
        )
    }
}
