//! Directory navigation state.
//!
//! The navigator owns the current directory, its breadcrumb trail and sorted
//! listing, and the file shown in the content pane. Fetching is split into a
//! request step and an apply step so results can arrive late: a result is
//! only applied when its path is still the most recently requested one.
//!
//! ```
//! use gitdocify::{MemoryHost, Navigator, RepoRef};
//!
//! let repo = RepoRef::new("octo", "handbook");
//! let host = MemoryHost::new()
//!     .with_file(&repo, "README.md", "# Handbook")
//!     .with_file(&repo, "docs/intro.md", "Hello");
//!
//! let mut nav = Navigator::new(repo);
//! nav.open_directory(&host, "docs")?;
//! assert_eq!(nav.current_path(), "docs");
//!
//! nav.open_breadcrumb(&host, 0)?;
//! assert_eq!(nav.current_path(), "");
//! # Ok::<(), gitdocify::HostError>(())
//! ```

use log::{debug, warn};

use crate::error::HostError;
use crate::host::{RepoRef, RepositoryHost};
use crate::path::{BreadcrumbTrail, build_breadcrumbs, normalize_path};
use crate::tree::{RepositoryEntry, select_default_entry, sort_entries};

/// Outstanding listing fetch for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a request does nothing until its result is applied"]
pub struct ListingRequest {
    path: String,
}

impl ListingRequest {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Outstanding text fetch for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a request does nothing until its result is applied"]
pub struct FileRequest {
    path: String,
}

impl FileRequest {
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Fetch started by selecting a listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Directory(ListingRequest),
    File(FileRequest),
}

/// What happened to an arriving listing result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The listing replaced the current directory.
    Applied {
        /// Document to show by default, if the listing has one.
        default_entry: Option<RepositoryEntry>,
    },
    /// A newer request superseded this one; the result was dropped.
    Stale,
}

/// What happened to an arriving file result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Applied,
    Stale,
}

/// File currently shown in the content pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFile {
    path: String,
    text: String,
}

impl OpenFile {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Navigation state for browsing one repository.
#[derive(Debug, Clone)]
pub struct Navigator {
    repo: RepoRef,
    label: String,
    current_path: String,
    breadcrumbs: BreadcrumbTrail,
    entries: Vec<RepositoryEntry>,
    current_file: Option<OpenFile>,
    pending_listing: Option<String>,
    pending_file: Option<String>,
}

impl Navigator {
    /// Creates a navigator at the repository root, labelled with the
    /// repository name. No listing is fetched until a directory is opened.
    pub fn new(repo: RepoRef) -> Self {
        let label = repo.name().to_string();
        Self::with_label(repo, label)
    }

    /// Creates a navigator whose root breadcrumb uses `label`.
    pub fn with_label(repo: RepoRef, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            breadcrumbs: build_breadcrumbs(&label, ""),
            repo,
            label,
            current_path: String::new(),
            entries: Vec::new(),
            current_file: None,
            pending_listing: None,
            pending_file: None,
        }
    }

    pub fn repo(&self) -> &RepoRef {
        &self.repo
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Directory whose listing is displayed (empty for root).
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn breadcrumbs(&self) -> &BreadcrumbTrail {
        &self.breadcrumbs
    }

    /// Listing of the current directory in display order.
    pub fn entries(&self) -> &[RepositoryEntry] {
        &self.entries
    }

    pub fn current_file(&self) -> Option<&OpenFile> {
        self.current_file.as_ref()
    }

    /// Default document of the current listing.
    pub fn default_entry(&self) -> Option<&RepositoryEntry> {
        select_default_entry(&self.entries)
    }

    /// True while a listing or file fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending_listing.is_some() || self.pending_file.is_some()
    }

    /// Starts navigation to a directory.
    ///
    /// Clears the content pane and supersedes any outstanding request. The
    /// current path and breadcrumbs change only when the listing is applied.
    pub fn request_directory(&mut self, path: &str) -> ListingRequest {
        let path = normalize_path(path);
        debug!("Requesting listing for '{}' in {}", path, self.repo);

        self.current_file = None;
        self.pending_file = None;
        self.pending_listing = Some(path.clone());

        ListingRequest { path }
    }

    /// Starts loading a file into the content pane.
    ///
    /// The previous file stays visible until the result is applied.
    pub fn request_file(&mut self, path: &str) -> FileRequest {
        let path = normalize_path(path);
        debug!("Requesting file '{}' in {}", path, self.repo);

        self.pending_file = Some(path.clone());

        FileRequest { path }
    }

    /// Starts the fetch that selecting `entry` implies.
    pub fn select_entry(&mut self, entry: &RepositoryEntry) -> Selection {
        if entry.is_dir() {
            Selection::Directory(self.request_directory(entry.path()))
        } else {
            Selection::File(self.request_file(entry.path()))
        }
    }

    /// Starts navigation to the breadcrumb at `index`.
    ///
    /// Returns `None` when the index is past the end of the trail.
    pub fn request_breadcrumb(&mut self, index: usize) -> Option<ListingRequest> {
        let path = self.breadcrumbs.get(index)?.path().to_string();
        Some(self.request_directory(&path))
    }

    /// Applies an arriving listing result.
    ///
    /// On success the listing replaces the current directory, breadcrumbs
    /// are rebuilt, and entries are sorted for display.
    ///
    /// # Errors
    ///
    /// Returns the host error for a current request. Path, breadcrumbs, and
    /// listing are left untouched and the content pane stays empty. Failures
    /// of superseded requests are dropped as [`ListingOutcome::Stale`].
    pub fn apply_listing(
        &mut self,
        request: ListingRequest,
        result: Result<Vec<RepositoryEntry>, HostError>,
    ) -> Result<ListingOutcome, HostError> {
        if self.pending_listing.as_deref() != Some(request.path.as_str()) {
            debug!("Dropping stale listing for '{}'", request.path);
            return Ok(ListingOutcome::Stale);
        }
        self.pending_listing = None;

        match result {
            Ok(entries) => {
                self.breadcrumbs = build_breadcrumbs(&self.label, &request.path);
                self.current_path = request.path;
                self.entries = sort_entries(entries);

                Ok(ListingOutcome::Applied {
                    default_entry: self.default_entry().cloned(),
                })
            }
            Err(err) => {
                warn!("Listing '{}' in {} failed: {}", request.path, self.repo, err);
                self.current_file = None;
                Err(err)
            }
        }
    }

    /// Applies an arriving file result.
    ///
    /// # Errors
    ///
    /// Returns the host error for a current request and clears the content
    /// pane. Failures of superseded requests are dropped as
    /// [`FileOutcome::Stale`].
    pub fn apply_file(
        &mut self,
        request: FileRequest,
        result: Result<String, HostError>,
    ) -> Result<FileOutcome, HostError> {
        if self.pending_file.as_deref() != Some(request.path.as_str()) {
            debug!("Dropping stale file result for '{}'", request.path);
            return Ok(FileOutcome::Stale);
        }
        self.pending_file = None;

        match result {
            Ok(text) => {
                self.current_file = Some(OpenFile {
                    path: request.path,
                    text,
                });
                Ok(FileOutcome::Applied)
            }
            Err(err) => {
                warn!("Loading '{}' in {} failed: {}", request.path, self.repo, err);
                self.current_file = None;
                Err(err)
            }
        }
    }

    /// Lists a directory through `host` and makes it current.
    ///
    /// Returns the listing's default document so the caller can open it.
    ///
    /// # Errors
    ///
    /// Returns the host error; navigation state is left as described in
    /// [`apply_listing`](Self::apply_listing).
    pub fn open_directory<H: RepositoryHost>(
        &mut self,
        host: &H,
        path: &str,
    ) -> Result<Option<RepositoryEntry>, HostError> {
        let request = self.request_directory(path);
        let result = host.list_entries(&self.repo, request.path());

        match self.apply_listing(request, result)? {
            ListingOutcome::Applied { default_entry } => Ok(default_entry),
            ListingOutcome::Stale => Ok(None),
        }
    }

    /// Loads a file through `host` into the content pane.
    ///
    /// # Errors
    ///
    /// Returns the host error and leaves the content pane empty.
    pub fn open_file<H: RepositoryHost>(&mut self, host: &H, path: &str) -> Result<(), HostError> {
        let request = self.request_file(path);
        let result = host.fetch_file_text(&self.repo, request.path());
        self.apply_file(request, result).map(|_| ())
    }

    /// Opens a listing entry: directories become current, files are loaded.
    ///
    /// Returns the new directory's default document when a directory was
    /// opened.
    ///
    /// # Errors
    ///
    /// Returns the host error of the listing or file fetch.
    pub fn open_entry<H: RepositoryHost>(
        &mut self,
        host: &H,
        entry: &RepositoryEntry,
    ) -> Result<Option<RepositoryEntry>, HostError> {
        if entry.is_dir() {
            self.open_directory(host, entry.path())
        } else {
            self.open_file(host, entry.path()).map(|_| None)
        }
    }

    /// Navigates to the breadcrumb at `index`; out of range does nothing.
    ///
    /// # Errors
    ///
    /// Returns the host error of the listing fetch.
    pub fn open_breadcrumb<H: RepositoryHost>(
        &mut self,
        host: &H,
        index: usize,
    ) -> Result<Option<RepositoryEntry>, HostError> {
        let Some(path) = self.breadcrumbs.get(index).map(|c| c.path().to_string()) else {
            return Ok(None);
        };
        self.open_directory(host, &path)
    }
}
