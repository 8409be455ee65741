//! Repository hosting collaborators.
//!
//! A host answers two questions about a repository: what is listed at a
//! directory path, and what text does a file contain. The navigator and site
//! generator only ever talk to a host through [`RepositoryHost`].

mod git;
mod memory;

pub use git::GitHost;
pub use memory::MemoryHost;

use std::fmt;

use crate::error::HostError;
use crate::tree::RepositoryEntry;

/// Identifies a repository on a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.owner.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}/{}", self.owner, self.name)
        }
    }
}

/// Source of repository listings and file text.
pub trait RepositoryHost {
    /// Lists entries directly beneath `path` (empty for the repository root).
    ///
    /// # Errors
    ///
    /// [`HostError::NotFound`] when the repository or path does not exist,
    /// [`HostError::AccessDenied`] when the host refuses access.
    fn list_entries(&self, repo: &RepoRef, path: &str) -> Result<Vec<RepositoryEntry>, HostError>;

    /// Fetches the text of the file at `path`.
    ///
    /// # Errors
    ///
    /// As [`list_entries`](Self::list_entries), plus [`HostError::Decoding`]
    /// when the file is binary or not valid UTF-8.
    fn fetch_file_text(&self, repo: &RepoRef, path: &str) -> Result<String, HostError>;
}

impl<H: RepositoryHost + ?Sized> RepositoryHost for &H {
    fn list_entries(&self, repo: &RepoRef, path: &str) -> Result<Vec<RepositoryEntry>, HostError> {
        (**self).list_entries(repo, path)
    }

    fn fetch_file_text(&self, repo: &RepoRef, path: &str) -> Result<String, HostError> {
        (**self).fetch_file_text(repo, path)
    }
}
