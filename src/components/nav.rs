//! Navigation breadcrumb component

use maud::{Markup, html};

use crate::path::{Breadcrumb, root_prefix, tree_page};

/// Renders breadcrumb navigation
///
/// The root crumb links to `index.html` and intermediate crumbs link to
/// their directory pages. The last element is the current location and is
/// plain text: the file name when `file_name` is given, otherwise the last
/// crumb of the trail.
///
/// # Arguments
///
/// * `trail`: Directory trail, root first
/// * `file_name`: Name of the file being viewed, if this is a file page
/// * `depth`: Directory depth of the page, for relative hrefs
pub fn breadcrumb(trail: &[Breadcrumb], file_name: Option<&str>, depth: usize) -> Markup {
    let prefix = root_prefix(depth);
    let last = trail.len().saturating_sub(1);

    html! {
        header {
            nav class="breadcrumb" aria-label="Breadcrumb" {
                @for (idx, crumb) in trail.iter().enumerate() {
                    @if idx > 0 {
                        span class="breadcrumb-separator" { "/" }
                    }
                    @if idx == last && file_name.is_none() {
                        span class="breadcrumb-current" { (crumb.label()) }
                    } @else {
                        a href=(format!("{}{}", prefix, tree_page(crumb.path()))) class="breadcrumb-link" {
                            (crumb.label())
                        }
                    }
                }
                @if let Some(name) = file_name {
                    span class="breadcrumb-separator" { "/" }
                    span class="breadcrumb-current" { (name) }
                }
            }
        }
    }
}
