//! Repository host over a local git repository.

use gix::bstr::ByteSlice;
use log::{debug, warn};
use std::fmt::Display;
use std::io;
use std::path::Path;

use super::{RepoRef, RepositoryHost};
use crate::error::HostError;
use crate::filetype::decode_text;
use crate::path::normalize_path;
use crate::tree::RepositoryEntry;

/// Serves one local git repository at a fixed reference.
///
/// Listings and file text are read from the tree of the resolved commit, not
/// from the working directory. Symlinks and submodules are not listed.
pub struct GitHost {
    repo: gix::Repository,
    repo_ref: RepoRef,
    git_ref: Option<String>,
}

impl GitHost {
    /// Opens the repository at `path`.
    ///
    /// # Arguments
    ///
    /// * `path`: Repository path on disk
    /// * `repo_ref`: Identity the repository is served under
    /// * `git_ref`: Branch, tag, or reference to read; HEAD when `None`
    ///
    /// # Errors
    ///
    /// [`HostError::AccessDenied`] when the directory cannot be read,
    /// [`HostError::NotFound`] when it is not a git repository or the
    /// reference does not resolve to a commit.
    pub fn open(
        path: impl AsRef<Path>,
        repo_ref: RepoRef,
        git_ref: Option<String>,
    ) -> Result<Self, HostError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if let Err(err) = std::fs::read_dir(path) {
            return Err(match err.kind() {
                io::ErrorKind::PermissionDenied => HostError::access_denied(display),
                _ => HostError::not_found(display),
            });
        }

        let repo = gix::open(path).map_err(|err| unavailable(&display, err))?;

        let host = Self {
            repo,
            repo_ref,
            git_ref,
        };
        host.resolve_commit()?;

        Ok(host)
    }

    /// Identity this host serves the repository under.
    pub fn repo_ref(&self) -> &RepoRef {
        &self.repo_ref
    }

    fn check_repo(&self, repo: &RepoRef) -> Result<(), HostError> {
        if repo != &self.repo_ref {
            return Err(HostError::not_found(repo.to_string()));
        }
        Ok(())
    }

    /// Resolves the configured reference to a commit.
    fn resolve_commit(&self) -> Result<gix::Commit<'_>, HostError> {
        match self.git_ref.as_deref() {
            Some(ref_str) => self
                .repo
                .find_reference(ref_str)
                .map_err(|err| unavailable(ref_str, err))?
                .into_fully_peeled_id()
                .map_err(|err| unavailable(ref_str, err))?
                .object()
                .map_err(|err| unavailable(ref_str, err))?
                .try_into_commit()
                .map_err(|err| unavailable(ref_str, err)),
            None => self
                .repo
                .head_commit()
                .map_err(|err| unavailable("HEAD", err)),
        }
    }

    /// Peels the commit tree down to the entry at `path`.
    fn entry_at(&self, path: &str) -> Result<gix::object::tree::Entry<'_>, HostError> {
        let mut tree = self
            .resolve_commit()?
            .tree()
            .map_err(|err| unavailable(path, err))?;

        tree.peel_to_entry_by_path(path)
            .map_err(|err| unavailable(path, err))?
            .ok_or_else(|| HostError::not_found(path))
    }

    fn tree_at(&self, dir_path: &str) -> Result<gix::Tree<'_>, HostError> {
        if dir_path.is_empty() {
            return self
                .resolve_commit()?
                .tree()
                .map_err(|err| unavailable(dir_path, err));
        }

        let entry = self.entry_at(dir_path)?;
        if !entry.mode().is_tree() {
            return Err(HostError::not_found(dir_path));
        }

        entry
            .object()
            .map_err(|err| unavailable(dir_path, err))?
            .try_into_tree()
            .map_err(|_| HostError::not_found(dir_path))
    }
}

impl RepositoryHost for GitHost {
    fn list_entries(&self, repo: &RepoRef, path: &str) -> Result<Vec<RepositoryEntry>, HostError> {
        self.check_repo(repo)?;

        let dir_path = normalize_path(path);
        let tree = self.tree_at(&dir_path)?;

        let mut entries = Vec::new();
        for entry in tree.iter() {
            let entry = entry.map_err(|err| unavailable(&dir_path, err))?;
            let name = entry.filename().to_str_lossy().into_owned();
            let child_path = if dir_path.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", dir_path, name)
            };

            let mode = entry.mode();
            if mode.is_tree() {
                entries.push(RepositoryEntry::directory(name, child_path));
            } else if mode.is_blob() {
                entries.push(RepositoryEntry::file(name, child_path));
            } else {
                debug!("Skipping non-browsable entry {}", child_path);
            }
        }

        Ok(entries)
    }

    fn fetch_file_text(&self, repo: &RepoRef, path: &str) -> Result<String, HostError> {
        self.check_repo(repo)?;

        let file_path = normalize_path(path);
        if file_path.is_empty() {
            return Err(HostError::not_found(path));
        }

        let entry = self.entry_at(&file_path)?;
        if !entry.mode().is_blob() {
            return Err(HostError::not_found(file_path));
        }

        let blob = entry
            .object()
            .map_err(|err| unavailable(&file_path, err))?
            .try_into_blob()
            .map_err(|_| HostError::not_found(file_path.as_str()))?;

        decode_text(blob.data.to_vec(), &file_path)
    }
}

/// Maps an underlying git failure to `NotFound`, keeping the cause in the log.
fn unavailable(path: &str, err: impl Display) -> HostError {
    warn!("Git lookup failed for '{}': {:#}", path, err);
    HostError::not_found(path)
}
