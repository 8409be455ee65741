//! Repository path and site URL utilities.

/// One step in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    label: String,
    path: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Directory path this crumb navigates to (empty for repository root).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Ordered ancestor trail for the current directory.
///
/// Always starts with the repository root crumb; each following crumb is one
/// path segment deeper than the one before it.
pub type BreadcrumbTrail = Vec<Breadcrumb>;

/// Splits a slash separated path into its non-empty segments.
///
/// Leading, trailing, and repeated slashes produce no segments.
pub fn path_components(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of a repository path: segments joined by single slashes.
pub fn normalize_path(path: &str) -> String {
    path_components(path).join("/")
}

/// Parent directory of a path, or `None` for the repository root.
pub fn parent_path(path: &str) -> Option<String> {
    path_components(path)
        .split_last()
        .map(|(_, parents)| parents.join("/"))
}

/// Builds the breadcrumb trail for a directory path.
///
/// # Arguments
///
/// * `repository_label`: Label of the root crumb (usually the repository name)
/// * `current_path`: Directory path, empty for the repository root
///
/// # Examples
///
/// ```
/// use gitdocify::build_breadcrumbs;
///
/// let trail = build_breadcrumbs("repo", "src/lib");
/// let paths: Vec<&str> = trail.iter().map(|c| c.path()).collect();
/// assert_eq!(paths, vec!["", "src", "src/lib"]);
/// ```
pub fn build_breadcrumbs(repository_label: &str, current_path: &str) -> BreadcrumbTrail {
    let components = path_components(current_path);
    let mut trail = Vec::with_capacity(components.len() + 1);
    trail.push(Breadcrumb::new(repository_label, ""));

    let mut prefix = String::new();
    for component in components {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(component);
        trail.push(Breadcrumb::new(component, prefix.clone()));
    }

    trail
}

/// Site-relative location of the page for a directory.
///
/// The repository root is `index.html`; other directories live under `tree/`.
pub fn tree_page(dir_path: &str) -> String {
    let dir_path = normalize_path(dir_path);
    if dir_path.is_empty() {
        "index.html".to_string()
    } else {
        format!("tree/{}.html", dir_path)
    }
}

/// Site-relative location of the page for a file.
pub fn blob_page(file_path: &str) -> String {
    format!("blob/{}.html", normalize_path(file_path))
}

/// Calculates how many `../` prefixes lead from a page back to site root.
///
/// # Arguments
///
/// * `page`: Site-relative page location, as returned by [`tree_page`] or
///   [`blob_page`]
pub fn calculate_depth(page: &str) -> usize {
    page.matches('/').count()
}

/// Prefix that climbs from a page at `depth` back to the site root.
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}
