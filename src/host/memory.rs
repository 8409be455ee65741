//! In-memory repository host.

use std::collections::HashMap;

use super::{RepoRef, RepositoryHost};
use crate::error::HostError;
use crate::filetype::decode_text;
use crate::path::{normalize_path, path_components};
use crate::tree::RepositoryEntry;

/// Repository host backed by in-memory directory trees.
///
/// Holds any number of repositories, each built from flat `(path, bytes)`
/// pairs. Repositories can be marked restricted to make every request fail
/// with [`HostError::AccessDenied`].
///
/// # Examples
///
/// ```
/// use gitdocify::{MemoryHost, RepoRef, RepositoryHost};
///
/// let repo = RepoRef::new("octo", "docs");
/// let host = MemoryHost::new()
///     .with_file(&repo, "README.md", "# Docs")
///     .with_file(&repo, "guide/intro.md", "Hello");
///
/// let root = host.list_entries(&repo, "")?;
/// assert_eq!(root.len(), 2);
/// # Ok::<(), gitdocify::HostError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    repositories: HashMap<RepoRef, StoredRepository>,
}

#[derive(Debug, Clone, Default)]
struct StoredRepository {
    tree: FileTree,
    restricted: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, creating the repository and intermediate directories.
    pub fn with_file(
        mut self,
        repo: &RepoRef,
        path: &str,
        contents: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert_file(repo, path, contents);
        self
    }

    /// Adds or replaces a file, creating the repository and intermediate
    /// directories.
    pub fn insert_file(&mut self, repo: &RepoRef, path: &str, contents: impl Into<Vec<u8>>) {
        self.repositories
            .entry(repo.clone())
            .or_default()
            .tree
            .insert(path, contents.into());
    }

    /// Registers an empty repository.
    pub fn add_repository(&mut self, repo: &RepoRef) {
        self.repositories.entry(repo.clone()).or_default();
    }

    /// Removes a file or a whole directory subtree.
    ///
    /// Returns true when something was removed.
    pub fn remove_path(&mut self, repo: &RepoRef, path: &str) -> bool {
        self.repositories
            .get_mut(repo)
            .map(|stored| stored.tree.remove(path))
            .unwrap_or(false)
    }

    /// Denies all further requests for a repository.
    pub fn restrict(&mut self, repo: &RepoRef) {
        self.repositories.entry(repo.clone()).or_default().restricted = true;
    }

    fn repository(&self, repo: &RepoRef, path: &str) -> Result<&FileTree, HostError> {
        let stored = self
            .repositories
            .get(repo)
            .ok_or_else(|| HostError::not_found(repo.to_string()))?;

        if stored.restricted {
            return Err(HostError::access_denied(path));
        }

        Ok(&stored.tree)
    }
}

impl RepositoryHost for MemoryHost {
    fn list_entries(&self, repo: &RepoRef, path: &str) -> Result<Vec<RepositoryEntry>, HostError> {
        self.repository(repo, path)?
            .entries_at(path)
            .ok_or_else(|| HostError::not_found(path))
    }

    fn fetch_file_text(&self, repo: &RepoRef, path: &str) -> Result<String, HostError> {
        let bytes = self
            .repository(repo, path)?
            .file(path)
            .ok_or_else(|| HostError::not_found(path))?;

        decode_text(bytes.to_vec(), path)
    }
}

/// Directory tree built from flat file paths.
#[derive(Debug, Clone, Default)]
struct FileTree {
    root: DirNode,
}

#[derive(Debug, Clone, Default)]
struct DirNode {
    files: HashMap<String, Vec<u8>>,
    subdirs: HashMap<String, DirNode>,
}

impl FileTree {
    fn insert(&mut self, path: &str, contents: Vec<u8>) {
        let components = path_components(path);
        let Some((file_name, dirs)) = components.split_last() else {
            return;
        };

        let mut current = &mut self.root;
        for &component in dirs {
            current.files.remove(component);
            current = current.subdirs.entry(component.to_string()).or_default();
        }

        current.subdirs.remove(*file_name);
        current.files.insert(file_name.to_string(), contents);
    }

    fn remove(&mut self, path: &str) -> bool {
        let components = path_components(path);
        let Some((name, dirs)) = components.split_last() else {
            return false;
        };

        let mut current = &mut self.root;
        for component in dirs {
            match current.subdirs.get_mut(*component) {
                Some(node) => current = node,
                None => return false,
            }
        }

        current.files.remove(*name).is_some() || current.subdirs.remove(*name).is_some()
    }

    fn get_node(&self, dir_path: &str) -> Option<&DirNode> {
        let mut current = &self.root;
        for component in path_components(dir_path) {
            current = current.subdirs.get(component)?;
        }
        Some(current)
    }

    fn entries_at(&self, dir_path: &str) -> Option<Vec<RepositoryEntry>> {
        let node = self.get_node(dir_path)?;
        let dir_path = normalize_path(dir_path);
        let child_path = |name: &str| {
            if dir_path.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", dir_path, name)
            }
        };

        let dirs = node
            .subdirs
            .keys()
            .map(|name| RepositoryEntry::directory(name.clone(), child_path(name)));
        let files = node
            .files
            .keys()
            .map(|name| RepositoryEntry::file(name.clone(), child_path(name)));

        Some(dirs.chain(files).collect())
    }

    fn file(&self, path: &str) -> Option<&[u8]> {
        let components = path_components(path);
        let (name, dirs) = components.split_last()?;
        let node = self.get_node(&dirs.join("/"))?;
        node.files.get(*name).map(Vec::as_slice)
    }
}
