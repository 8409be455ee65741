//! Entry icon rendering and detection

use maud::{Markup, html};
use std::path::Path;

use crate::filetype::is_markdown;
use crate::tree::{EntryKind, RepositoryEntry};

/// Renders the icon for a listing entry
///
/// Generates Phosphor icon HTML with CSS classes for visual distinction of
/// directories, READMEs, Markdown documents, and source files.
pub fn entry_icon(entry: &RepositoryEntry) -> Markup {
    let (icon_class, icon_modifier) = icon_classes(entry.name(), entry.kind());

    html! {
        div class="icon-box" {
            @if let Some(modifier) = icon_modifier {
                i class=(format!("{} {}", icon_class, modifier)) {}
            } @else {
                i class=(icon_class) {}
            }
        }
    }
}

/// Returns Phosphor icon classes for an entry
///
/// # Arguments
///
/// * `name`: Entry name
/// * `kind`: Directory or file
///
/// # Returns
///
/// Phosphor icon class name and optional CSS modifier class for color styling
pub fn icon_classes(name: &str, kind: EntryKind) -> (&'static str, Option<&'static str>) {
    if kind == EntryKind::Directory {
        return ("ph-fill ph-folder", Some("icon-folder"));
    }

    if is_readme(name) {
        return ("ph ph-info", Some("icon-readme"));
    }

    if is_markdown(name) {
        return ("ph ph-file-md", Some("icon-markdown"));
    }

    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("rs") => ("ph ph-file-rs", Some("icon-rust")),
        Some("toml" | "yaml" | "yml" | "json") => ("ph ph-gear", Some("icon-config")),
        Some("png" | "jpg" | "jpeg" | "gif" | "svg" | "webp") => {
            ("ph ph-file-image", Some("icon-image"))
        }
        _ => ("ph ph-file", None),
    }
}

/// Checks if a file name is a README, case insensitively, with or without
/// extension.
pub fn is_readme(name: impl AsRef<Path>) -> bool {
    name.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_lowercase().starts_with("readme"))
        .unwrap_or(false)
}
