//! File listing table components

use maud::{Markup, html};

/// Wraps file rows in table container
///
/// Provides semantic file table structure with consistent styling.
/// The container handles the card styling while individual rows are
/// rendered by `file_row`.
///
/// # Arguments
///
/// * `rows`: Markup containing individual file row elements
pub fn file_table(rows: Markup) -> Markup {
    html! {
        div class="file-table" {
            (rows)
        }
    }
}

/// Renders single file row in table
///
/// Rows without a link target are shown dimmed and cannot be opened, which
/// is how files without a text rendering appear in the listing.
///
/// # Arguments
///
/// * `href`: Link target for row click, `None` for unpublished files
/// * `icon`: Icon markup (from icons module)
/// * `name`: File or directory name to display
/// * `note`: Short annotation shown next to the name
pub fn file_row(href: Option<&str>, icon: Markup, name: &str, note: &str) -> Markup {
    html! {
        @if let Some(href) = href {
            a href=(href) class="file-row" {
                div class="file-name-cell" {
                    (icon)
                    span { (name) }
                }
                div class="file-note" { (note) }
            }
        } @else {
            div class="file-row file-row-disabled" {
                div class="file-name-cell" {
                    (icon)
                    span { (name) }
                }
                div class="file-note" { (note) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_row() {
        // Arrange & Act
        let html = file_row(Some("blob/a.md.html"), html! {}, "a.md", "").into_string();

        // Assert
        assert!(html.starts_with("<a href=\"blob/a.md.html\" class=\"file-row\">"), "{}", html);
        assert!(html.contains("<span>a.md</span>"));
    }

    #[test]
    fn test_unlinked_row() {
        // Arrange & Act
        let html = file_row(None, html! {}, "logo.png", "binary").into_string();

        // Assert
        assert!(!html.contains("href"), "Unpublished file must not link: {}", html);
        assert!(html.contains("file-row-disabled"));
        assert!(html.contains("binary"));
    }
}
