//! Link resolution for repository internal references.

use anyhow::{Result, bail};

use crate::path::{blob_page, parent_path, root_prefix, tree_page};

/// Schemes that are never emitted as an href.
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Resolves relative links in markdown to generated site pages.
///
/// Transforms repository internal links (`./file.rs`, `../docs/`) into
/// page-relative URLs pointing at generated pages (`blob/file.rs.html`,
/// `tree/docs.html`). The depth prefix walks back up from the page being
/// rendered to the site root.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    base_dir: String,
    depth: usize,
}

impl LinkResolver {
    /// Creates a resolver for a document rendered on a root level page.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Repository path of the markdown file being rendered
    pub fn new(current_path: &str) -> Self {
        Self::with_depth(current_path, 0)
    }

    /// Creates a resolver for a document rendered `depth` directories below
    /// the site root.
    ///
    /// # Arguments
    ///
    /// * `current_path`: Repository path of the markdown file being rendered
    /// * `depth`: Directory depth of the rendered page
    pub fn with_depth(current_path: &str, depth: usize) -> Self {
        Self {
            base_dir: parent_path(current_path).unwrap_or_default(),
            depth,
        }
    }

    /// Resolves a link target to an href.
    ///
    /// - Absolute URLs and `mailto:` remain unchanged
    /// - Anchor links (`#section`) remain unchanged
    /// - Relative paths resolve against the current file's directory
    /// - A trailing `/` links the directory page, anything else the file page
    /// - A `#fragment` on a relative link is carried over
    ///
    /// # Errors
    ///
    /// Returns error for script-capable schemes and for paths that escape
    /// the repository root.
    pub fn resolve(&self, link: &str) -> Result<String> {
        let link = link.trim();
        if is_unsafe_link(link) {
            bail!("Refusing unsafe link: {}", link);
        }

        let lower = link.to_ascii_lowercase();

        if lower.starts_with("http://")
            || lower.starts_with("https://")
            || lower.starts_with("mailto:")
            || link.contains("://")
        {
            return Ok(link.to_string());
        }

        if link.is_empty() || link.starts_with('#') {
            return Ok(link.to_string());
        }

        let (target, fragment) = match link.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (link, None),
        };

        let joined = if let Some(absolute) = target.strip_prefix('/') {
            absolute.to_string()
        } else if self.base_dir.is_empty() {
            target.to_string()
        } else {
            format!("{}/{}", self.base_dir, target)
        };

        let normalized = Self::normalize_path(&joined)?;

        let page = if target.ends_with('/') || normalized.is_empty() {
            tree_page(&normalized)
        } else {
            blob_page(&normalized)
        };

        let mut href = format!("{}{}", root_prefix(self.depth), page);
        if let Some(fragment) = fragment {
            href.push('#');
            href.push_str(fragment);
        }

        Ok(href)
    }

    /// Resolves `.` and `..` components.
    ///
    /// # Errors
    ///
    /// Returns error if the path climbs above the repository root.
    fn normalize_path(path: &str) -> Result<String> {
        let mut components: Vec<&str> = Vec::new();

        for component in path.split('/') {
            match component {
                "" | "." => {}
                ".." => {
                    if components.pop().is_none() {
                        bail!("Path escapes repository root: {}", path);
                    }
                }
                name => components.push(name),
            }
        }

        Ok(components.join("/"))
    }
}

/// True for links whose scheme can run script in the browser.
pub(super) fn is_unsafe_link(link: &str) -> bool {
    let lower = link.trim().to_ascii_lowercase();
    UNSAFE_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}
