//! Repository directory listings.
//!
//! A listing is the flat set of entries directly beneath one directory of a
//! hosted repository. This module orders listings for display and picks the
//! document shown when a directory is opened.

use std::cmp::Ordering;

/// File name that always wins default document selection.
pub const README_NAME: &str = "README.md";

/// Kind of a repository entry.
///
/// Declaration order is display order: directories sort before files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// One file or directory listed at a path in a hosted repository.
///
/// Identified by `path` within a single listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryEntry {
    name: String,
    path: String,
    kind: EntryKind,
}

impl RepositoryEntry {
    /// Creates a file entry.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    /// Creates a directory entry.
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Entry name (last path segment).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash separated path relative to repository root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Display ordering: directories first, then ascending by name.
///
/// Names compare byte-wise, so uppercase sorts before lowercase.
fn display_order(a: &RepositoryEntry, b: &RepositoryEntry) -> Ordering {
    a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name))
}

/// Sorts a listing for display.
///
/// Directories come before files; entries of the same kind are ordered
/// ascending by name. The sort is stable.
///
/// # Examples
///
/// ```
/// use gitdocify::{RepositoryEntry, sort_entries};
///
/// let sorted = sort_entries(vec![
///     RepositoryEntry::file("b", "b"),
///     RepositoryEntry::directory("a", "a"),
///     RepositoryEntry::file("a", "a"),
/// ]);
/// assert!(sorted[0].is_dir());
/// assert_eq!(sorted[2].name(), "b");
/// ```
pub fn sort_entries(mut entries: Vec<RepositoryEntry>) -> Vec<RepositoryEntry> {
    entries.sort_by(display_order);
    entries
}

/// Picks the document to show when a directory is opened.
///
/// Returns the entry named exactly `README.md` when present, regardless of
/// where it sorts. Otherwise returns the first file in display order, or
/// `None` when the listing holds no files.
pub fn select_default_entry(entries: &[RepositoryEntry]) -> Option<&RepositoryEntry> {
    if let Some(readme) = entries
        .iter()
        .find(|entry| entry.is_file() && entry.name == README_NAME)
    {
        return Some(readme);
    }

    entries
        .iter()
        .filter(|entry| entry.is_file())
        .min_by(|a, b| display_order(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[RepositoryEntry]) -> Vec<(&str, EntryKind)> {
        entries.iter().map(|e| (e.name(), e.kind())).collect()
    }

    #[test]
    fn test_sort_directories_before_files() {
        // Arrange
        let entries = vec![
            RepositoryEntry::file("b", "b"),
            RepositoryEntry::directory("a", "a"),
            RepositoryEntry::file("a", "a"),
        ];

        // Act
        let sorted = sort_entries(entries);

        // Assert
        assert_eq!(
            names(&sorted),
            vec![
                ("a", EntryKind::Directory),
                ("a", EntryKind::File),
                ("b", EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_sort_alphabetical_within_kind() {
        // Arrange
        let entries = vec![
            RepositoryEntry::directory("src", "src"),
            RepositoryEntry::file("guide.md", "guide.md"),
            RepositoryEntry::directory("docs", "docs"),
            RepositoryEntry::file("api.md", "api.md"),
        ];

        // Act
        let sorted = sort_entries(entries);

        // Assert
        let order: Vec<&str> = sorted.iter().map(|e| e.name()).collect();
        assert_eq!(order, vec!["docs", "src", "api.md", "guide.md"]);
    }

    #[test]
    fn test_sort_is_case_aware() {
        // Arrange
        let entries = vec![
            RepositoryEntry::file("alpha.md", "alpha.md"),
            RepositoryEntry::file("Zeta.md", "Zeta.md"),
        ];

        // Act
        let sorted = sort_entries(entries);

        // Assert
        assert_eq!(
            sorted[0].name(),
            "Zeta.md",
            "Uppercase names sort before lowercase"
        );
    }

    #[test]
    fn test_sort_empty_listing() {
        // Arrange & Act
        let sorted = sort_entries(Vec::new());

        // Assert
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_default_prefers_readme() {
        // Arrange
        let entries = vec![
            RepositoryEntry::file("CHANGELOG.md", "CHANGELOG.md"),
            RepositoryEntry::file("README.md", "README.md"),
            RepositoryEntry::file("API.md", "API.md"),
        ];

        // Act
        let selected = select_default_entry(&entries);

        // Assert
        assert_eq!(selected.map(|e| e.name()), Some("README.md"));
    }

    #[test]
    fn test_default_falls_back_to_first_sorted_file() {
        // Arrange: unsorted input, directory listed first
        let entries = vec![
            RepositoryEntry::file("zebra.md", "zebra.md"),
            RepositoryEntry::directory("docs", "docs"),
            RepositoryEntry::file("intro.md", "intro.md"),
        ];

        // Act
        let selected = select_default_entry(&entries);

        // Assert
        assert_eq!(selected.map(|e| e.path()), Some("intro.md"));
    }

    #[test]
    fn test_default_readme_match_is_exact() {
        // Arrange
        let entries = vec![
            RepositoryEntry::file("readme.md", "readme.md"),
            RepositoryEntry::file("Intro.md", "Intro.md"),
        ];

        // Act
        let selected = select_default_entry(&entries);

        // Assert
        assert_eq!(
            selected.map(|e| e.name()),
            Some("Intro.md"),
            "Lowercase readme.md is not the README"
        );
    }

    #[test]
    fn test_default_none_without_files() {
        // Arrange
        let entries = vec![
            RepositoryEntry::directory("docs", "docs"),
            RepositoryEntry::directory("src", "src"),
        ];

        // Act & Assert
        assert!(select_default_entry(&entries).is_none());
        assert!(select_default_entry(&[]).is_none());
    }

    #[test]
    fn test_directory_named_readme_is_not_selected() {
        // Arrange
        let entries = vec![
            RepositoryEntry::directory("README.md", "README.md"),
            RepositoryEntry::file("index.md", "index.md"),
        ];

        // Act
        let selected = select_default_entry(&entries);

        // Assert
        assert_eq!(selected.map(|e| e.name()), Some("index.md"));
    }
}
