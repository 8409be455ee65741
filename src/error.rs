//! Failures reported by repository hosts.

use thiserror::Error;

/// Error returned by a [`RepositoryHost`](crate::RepositoryHost) when a
/// listing or file fetch cannot be satisfied.
///
/// None of these are fatal: callers surface them and offer a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// Repository, reference, or path does not exist.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The host refused access to the repository or path.
    #[error("access denied: {path}")]
    AccessDenied { path: String },

    /// Content exists but cannot be interpreted as text.
    #[error("cannot decode as text: {path}")]
    Decoding { path: String },
}

impl HostError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn access_denied(path: impl Into<String>) -> Self {
        Self::AccessDenied { path: path.into() }
    }

    pub fn decoding(path: impl Into<String>) -> Self {
        Self::Decoding { path: path.into() }
    }

    /// Path the failed request was made for.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::AccessDenied { path } | Self::Decoding { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        // Arrange
        let err = HostError::not_found("docs/guide.md");

        // Act
        let msg = err.to_string();

        // Assert
        assert_eq!(msg, "not found: docs/guide.md");
    }

    #[test]
    fn test_path_accessor_for_every_variant() {
        // Arrange & Act & Assert
        assert_eq!(HostError::not_found("a").path(), "a");
        assert_eq!(HostError::access_denied("b").path(), "b");
        assert_eq!(HostError::decoding("c").path(), "c");
    }
}
