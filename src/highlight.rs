//! Syntax highlighting with syntect.

use anyhow::{Context, Result};
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// CSS class prefix shared with the bundled stylesheets.
const CLASS_PREFIX: &str = "hljs-";

/// Produces class-annotated HTML for source code.
///
/// Output uses CSS class names (`hljs-*`) rather than inline styles, so the
/// active site theme decides the colours.
pub struct Highlighter {
    syntax_set: SyntaxSet,
}

impl Highlighter {
    /// Creates highlighter with syntect's default syntax definitions.
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlights code for a fenced block language tag.
    ///
    /// # Arguments
    ///
    /// * `code`: Source code to highlight
    /// * `token`: Language identifier (rust, python, sh, ...)
    ///
    /// # Returns
    ///
    /// `None` if the language is unknown
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight_token(&self, code: &str, token: &str) -> Result<Option<String>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token));

        syntax.map(|syntax| self.generate(code, syntax)).transpose()
    }

    /// Highlights a whole file, detecting the language from its path.
    ///
    /// # Returns
    ///
    /// `None` if no syntax matches the file name or extension
    ///
    /// # Errors
    ///
    /// Returns error if syntect fails to parse a line
    pub fn highlight_path(&self, code: &str, path: impl AsRef<Path>) -> Result<Option<String>> {
        let path = path.as_ref();
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let syntax = self
            .syntax_set
            .find_syntax_by_extension(file_name)
            .or_else(|| self.syntax_set.find_syntax_by_extension(extension))
            .or_else(|| {
                code.lines()
                    .next()
                    .and_then(|first| self.syntax_set.find_syntax_by_first_line(first))
            });

        syntax.map(|syntax| self.generate(code, syntax)).transpose()
    }

    fn generate(&self, code: &str, syntax: &SyntaxReference) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_rust_token() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight_token("fn main() {}\n", "rust")
            .expect("Highlighting should succeed")
            .expect("Rust should be known");

        // Assert
        assert!(html.contains("hljs-"), "Should emit prefixed classes");
        assert!(html.contains("main"), "Should keep source text");
    }

    #[test]
    fn test_unknown_token_is_none() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let result = highlighter
            .highlight_token("text", "not-a-language")
            .expect("Lookup should not fail");

        // Assert
        assert!(result.is_none());
    }

    #[test]
    fn test_highlight_by_extension_token() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let result = highlighter
            .highlight_token("print('hi')\n", "py")
            .expect("Highlighting should succeed");

        // Assert
        assert!(result.is_some(), "Extension should work as a token");
    }

    #[test]
    fn test_highlight_path_detects_language() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight_path("let x = 42;\n", "src/main.rs")
            .expect("Highlighting should succeed");

        // Assert
        assert!(html.is_some_and(|h| h.contains("hljs-")));
    }

    #[test]
    fn test_highlight_path_unknown_extension() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let result = highlighter
            .highlight_path("data", "notes.unknownext")
            .expect("Lookup should not fail");

        // Assert
        assert!(result.is_none());
    }

    #[test]
    fn test_highlight_escapes_html() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight_token("let s = \"<b>&</b>\";\n", "rust")
            .expect("Highlighting should succeed")
            .expect("Rust should be known");

        // Assert
        assert!(html.contains("&lt;b&gt;"), "Should escape markup");
        assert!(!html.contains("<b>"), "Should not emit raw tags");
    }

    #[test]
    fn test_highlight_empty_code() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = highlighter
            .highlight_token("", "rust")
            .expect("Should handle empty code");

        // Assert
        assert_eq!(html.as_deref(), Some(""));
    }
}
