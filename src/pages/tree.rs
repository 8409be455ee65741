//! Directory page generation

use maud::{Markup, html};
use std::collections::HashSet;

use super::PageSettings;
use super::blob::document;
use crate::assets::stylesheets;
use crate::components::file_list::{file_row, file_table};
use crate::components::icons::entry_icon;
use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::highlight::Highlighter;
use crate::path::{Breadcrumb, blob_page, calculate_depth, parent_path, root_prefix, tree_page};
use crate::tree::RepositoryEntry;

/// Everything shown on one directory page.
pub struct DirectoryView<'a> {
    /// Directory path, empty for the repository root
    pub path: &'a str,
    pub breadcrumbs: &'a [Breadcrumb],
    /// Listing in display order
    pub entries: &'a [RepositoryEntry],
    /// File paths that have no page and are listed without a link
    pub unpublished: &'a HashSet<String>,
    /// Default entry and its text, shown below the listing
    pub default_document: Option<(&'a RepositoryEntry, &'a str)>,
}

/// Generates the HTML page for a directory
///
/// Shows the breadcrumb trail, the listing with a `..` row below the root,
/// and the default document of the directory when there is one.
pub fn generate(
    settings: PageSettings<'_>,
    highlighter: &Highlighter,
    view: &DirectoryView<'_>,
) -> Markup {
    let depth = calculate_depth(&tree_page(view.path));
    let prefix = root_prefix(depth);
    let title = if view.path.is_empty() {
        settings.site_name
    } else {
        view.path
    };

    page_wrapper(
        title,
        settings.site_name,
        &stylesheets(settings.theme, depth),
        html! {
            (breadcrumb(view.breadcrumbs, None, depth))
            main class="tree-container" {
                @if view.entries.is_empty() && view.path.is_empty() {
                    p class="empty-state" { "Empty directory" }
                } @else {
                    (file_table(html! {
                        @if let Some(parent) = parent_path(view.path) {
                            a href=(format!("{}{}", prefix, tree_page(&parent))) class="file-row" {
                                div class="file-name-cell" {
                                    div class="icon-box" {
                                        i class="ph ph-arrow-up icon-folder" {}
                                    }
                                    span { ".." }
                                }
                            }
                        }
                        @for entry in view.entries {
                            (entry_row(entry, view.unpublished, &prefix))
                        }
                    }))
                }
                @if let Some((entry, text)) = view.default_document {
                    section class="default-document" {
                        div class="default-document-title" { (entry.name()) }
                        (document(highlighter, entry.path(), text, depth))
                    }
                }
            }
        },
    )
}

fn entry_row(entry: &RepositoryEntry, unpublished: &HashSet<String>, prefix: &str) -> Markup {
    if entry.is_dir() {
        let href = format!("{}{}", prefix, tree_page(entry.path()));
        return file_row(Some(&href), entry_icon(entry), entry.name(), "");
    }

    if unpublished.contains(entry.path()) {
        return file_row(None, entry_icon(entry), entry.name(), "not viewable");
    }

    let href = format!("{}{}", prefix, blob_page(entry.path()));
    file_row(Some(&href), entry_icon(entry), entry.name(), "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::path::build_breadcrumbs;

    fn settings() -> PageSettings<'static> {
        PageSettings {
            site_name: "handbook",
            theme: Theme::Docs,
        }
    }

    #[test]
    fn test_root_page_listing() {
        // Arrange
        let highlighter = Highlighter::new();
        let trail = build_breadcrumbs("handbook", "");
        let entries = vec![
            RepositoryEntry::directory("docs", "docs"),
            RepositoryEntry::file("README.md", "README.md"),
        ];
        let unpublished = HashSet::new();
        let view = DirectoryView {
            path: "",
            breadcrumbs: &trail,
            entries: &entries,
            unpublished: &unpublished,
            default_document: Some((&entries[1], "# Welcome")),
        };

        // Act
        let html = generate(settings(), &highlighter, &view).into_string();

        // Assert
        assert!(html.contains("href=\"tree/docs.html\""), "{}", html);
        assert!(html.contains("href=\"blob/README.md.html\""), "{}", html);
        assert!(html.contains("<h1>Welcome</h1>"), "Default document rendered");
        assert!(html.contains("assets/theme-docs.css"));
        assert!(!html.contains("ph-arrow-up"), "Root has no parent row");
    }

    #[test]
    fn test_nested_page_parent_row_and_depth() {
        // Arrange
        let highlighter = Highlighter::new();
        let trail = build_breadcrumbs("handbook", "docs/api");
        let entries = vec![RepositoryEntry::file("index.md", "docs/api/index.md")];
        let unpublished = HashSet::new();
        let view = DirectoryView {
            path: "docs/api",
            breadcrumbs: &trail,
            entries: &entries,
            unpublished: &unpublished,
            default_document: None,
        };

        // Act
        let html = generate(settings(), &highlighter, &view).into_string();

        // Assert
        assert!(
            html.contains("href=\"../../tree/docs.html\" class=\"file-row\""),
            "Parent row links up one level: {}",
            html
        );
        assert!(html.contains("href=\"../../blob/docs/api/index.md.html\""));
        assert!(html.contains("<title>docs/api - handbook</title>"));
    }

    #[test]
    fn test_unpublished_file_not_linked() {
        // Arrange
        let highlighter = Highlighter::new();
        let trail = build_breadcrumbs("handbook", "");
        let entries = vec![RepositoryEntry::file("logo.png", "logo.png")];
        let unpublished: HashSet<String> = ["logo.png".to_string()].into_iter().collect();
        let view = DirectoryView {
            path: "",
            breadcrumbs: &trail,
            entries: &entries,
            unpublished: &unpublished,
            default_document: None,
        };

        // Act
        let html = generate(settings(), &highlighter, &view).into_string();

        // Assert
        assert!(!html.contains("blob/logo.png.html"), "{}", html);
        assert!(html.contains("logo.png"));
        assert!(html.contains("not viewable"));
    }

    #[test]
    fn test_empty_root() {
        // Arrange
        let highlighter = Highlighter::new();
        let trail = build_breadcrumbs("handbook", "");
        let unpublished = HashSet::new();
        let view = DirectoryView {
            path: "",
            breadcrumbs: &trail,
            entries: &[],
            unpublished: &unpublished,
            default_document: None,
        };

        // Act
        let html = generate(settings(), &highlighter, &view).into_string();

        // Assert
        assert!(html.contains("Empty directory"));
    }
}
