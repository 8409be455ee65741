//! File page generation

use log::warn;
use maud::{Markup, PreEscaped, html};

use super::PageSettings;
use crate::assets::stylesheets;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::filetype::DocumentKind;
use crate::highlight::Highlighter;
use crate::markdown::{LinkResolver, MarkdownRenderer};
use crate::path::{Breadcrumb, blob_page, calculate_depth, path_components};

/// Generates the HTML page for one file
///
/// Markdown documents are rendered, anything else is shown as highlighted
/// source with line numbers.
///
/// # Arguments
///
/// * `settings`: Site name and theme
/// * `highlighter`: Shared syntax highlighter
/// * `file_path`: File path within the repository
/// * `text`: File content
/// * `breadcrumbs`: Trail of the directory containing the file
pub fn generate(
    settings: PageSettings<'_>,
    highlighter: &Highlighter,
    file_path: &str,
    text: &str,
    breadcrumbs: &[Breadcrumb],
) -> Markup {
    let depth = calculate_depth(&blob_page(file_path));
    let file_name = path_components(file_path)
        .last()
        .copied()
        .unwrap_or(file_path);

    page_wrapper(
        file_path,
        settings.site_name,
        &stylesheets(settings.theme, depth),
        html! {
            (breadcrumb(breadcrumbs, Some(file_name), depth))
            main class="blob-container" {
                (document(highlighter, file_path, text, depth))
            }
        },
    )
}

/// Renders file content for a page at `depth`.
///
/// Relative links inside Markdown resolve against `file_path`.
pub fn document(highlighter: &Highlighter, file_path: &str, text: &str, depth: usize) -> Markup {
    match DocumentKind::from_path(file_path) {
        DocumentKind::Markdown => {
            let resolver = LinkResolver::with_depth(file_path, depth);
            MarkdownRenderer::with_link_resolver(highlighter, resolver).render(text)
        }
        DocumentKind::Source => source_view(highlighter, file_path, text),
    }
}

fn source_view(highlighter: &Highlighter, file_path: &str, text: &str) -> Markup {
    let highlighted = match highlighter.highlight_path(text, file_path) {
        Ok(html) => html,
        Err(err) => {
            warn!("Showing '{}' without highlighting: {:#}", file_path, err);
            None
        }
    };
    let line_count = text.lines().count().max(1);

    html! {
        div class="source-view" {
            div class="line-numbers" {
                @for line_num in 1..=line_count {
                    a href=(format!("#L{}", line_num)) id=(format!("L{}", line_num)) class="line-number" {
                        (line_num)
                    }
                }
            }
            pre class="code-content" {
                code {
                    @match highlighted {
                        Some(html) => (PreEscaped(html)),
                        None => (text),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::path::build_breadcrumbs;

    fn settings() -> PageSettings<'static> {
        PageSettings {
            site_name: "handbook",
            theme: Theme::Default,
        }
    }

    #[test]
    fn test_generate_markdown_page() {
        // Arrange
        let highlighter = Highlighter::new();
        let trail = build_breadcrumbs("handbook", "docs");

        // Act
        let html = generate(
            settings(),
            &highlighter,
            "docs/guide.md",
            "# Guide\n\nSee [intro](intro.md).",
            &trail,
        )
        .into_string();

        // Assert
        assert!(html.contains("<h1>Guide</h1>"), "Markdown should render: {}", html);
        assert!(
            html.contains("href=\"../../blob/docs/intro.md.html\""),
            "Links resolve relative to page depth: {}",
            html
        );
        assert!(html.contains("href=\"../../assets/site.css\""));
        assert!(html.contains("<span class=\"breadcrumb-current\">guide.md</span>"));
    }

    #[test]
    fn test_generate_source_page() {
        // Arrange
        let highlighter = Highlighter::new();
        let trail = build_breadcrumbs("handbook", "");

        // Act
        let html = generate(
            settings(),
            &highlighter,
            "main.rs",
            "fn main() {}\nfn other() {}\n",
            &trail,
        )
        .into_string();

        // Assert
        assert!(html.contains("id=\"L2\""), "Should number every line: {}", html);
        assert!(!html.contains("id=\"L3\""));
        assert!(html.contains("hljs-"), "Rust source should be highlighted");
        assert!(html.contains("href=\"../index.html\""), "Root crumb should link home");
    }

    #[test]
    fn test_unknown_source_is_escaped() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = document(&highlighter, "notes.unknownext", "<b>hi</b>", 1).into_string();

        // Assert
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"), "{}", html);
    }

    #[test]
    fn test_markdown_extension_case_insensitive() {
        // Arrange
        let highlighter = Highlighter::new();

        // Act
        let html = document(&highlighter, "NOTES.MARKDOWN", "## Notes", 1).into_string();

        // Assert
        assert!(html.contains("<h2>Notes</h2>"), "{}", html);
    }
}
