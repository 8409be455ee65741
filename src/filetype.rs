//! File content classification.
//!
//! Decides whether blob bytes can be shown as text, and whether a text file
//! is a Markdown document or plain source:
//! 1. NUL byte heuristic (git's binary detection approach)
//! 2. UTF-8 validation
//! 3. Extension check for Markdown

use std::path::Path;

use crate::error::HostError;

/// Maximum bytes to check for NUL byte heuristic (git uses 8KB).
const BINARY_CHECK_LEN: usize = 8192;

/// Extensions rendered as Markdown documents.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// How a text file is presented on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Rendered through the Markdown pipeline
    Markdown,
    /// Shown as syntax highlighted source
    Source,
}

impl DocumentKind {
    /// Classifies a file by its path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        if is_markdown(path) {
            Self::Markdown
        } else {
            Self::Source
        }
    }
}

/// Checks if a file path names a Markdown document (case insensitive).
pub fn is_markdown(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Returns true when bytes look binary to git.
pub fn is_binary(bytes: &[u8]) -> bool {
    let check_len = bytes.len().min(BINARY_CHECK_LEN);
    bytes[..check_len].contains(&0)
}

/// Decodes blob bytes as UTF-8 text.
///
/// # Errors
///
/// Returns [`HostError::Decoding`] for binary content or invalid UTF-8.
pub fn decode_text(bytes: Vec<u8>, path: &str) -> Result<String, HostError> {
    if is_binary(&bytes) {
        return Err(HostError::decoding(path));
    }

    String::from_utf8(bytes).map_err(|_| HostError::decoding(path))
}
