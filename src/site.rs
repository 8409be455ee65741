//! Static documentation site generation.
//!
//! Walks a hosted repository breadth-first with a [`Navigator`], writing a
//! directory page per listing and a file page per text file.

use anyhow::{Context, Result};
use log::{info, warn};
use maud::Markup;
use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{ASSETS_DIR, write_css_assets};
use crate::config::Theme;
use crate::error::HostError;
use crate::highlight::Highlighter;
use crate::host::{RepoRef, RepositoryHost};
use crate::navigator::Navigator;
use crate::pages::tree::DirectoryView;
use crate::pages::{PageSettings, blob, tree};
use crate::path::{blob_page, tree_page};

/// Counts of what a generation run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteSummary {
    /// Directory pages written, including `index.html`
    pub directories: usize,
    /// File pages written
    pub files: usize,
    /// Files and directories without a page
    pub skipped: usize,
}

/// Generates a static site for one repository.
pub struct SiteGenerator<'h, H: RepositoryHost> {
    host: &'h H,
    repo: RepoRef,
    site_name: String,
    output: PathBuf,
    theme: Theme,
    highlighter: Highlighter,
}

impl<'h, H: RepositoryHost> SiteGenerator<'h, H> {
    /// Creates a generator writing into `output`, named after the repository.
    pub fn new(host: &'h H, repo: RepoRef, output: impl Into<PathBuf>) -> Self {
        Self {
            host,
            site_name: repo.name().to_string(),
            repo,
            output: output.into(),
            theme: Theme::default(),
            highlighter: Highlighter::new(),
        }
    }

    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Path of the site's entry page.
    pub fn index_path(&self) -> PathBuf {
        self.output.join(tree_page(""))
    }

    /// Writes the whole site.
    ///
    /// Unreadable subdirectories and files are logged and skipped; files that
    /// are not text are listed without a page.
    ///
    /// # Errors
    ///
    /// Returns error if the repository root cannot be listed or a page cannot
    /// be written.
    pub fn generate(&self) -> Result<SiteSummary> {
        fs::create_dir_all(&self.output).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output.display()
            )
        })?;
        write_css_assets(&self.output.join(ASSETS_DIR))?;

        let settings = PageSettings {
            site_name: &self.site_name,
            theme: self.theme,
        };
        let mut navigator = Navigator::with_label(self.repo.clone(), self.site_name.as_str());
        let mut summary = SiteSummary::default();
        let mut queue = VecDeque::from([String::new()]);

        while let Some(dir_path) = queue.pop_front() {
            let default_entry = match navigator.open_directory(self.host, &dir_path) {
                Ok(default_entry) => default_entry,
                Err(err) if dir_path.is_empty() => {
                    return Err(err).with_context(|| {
                        format!("Failed to list repository root of {}", self.repo)
                    });
                }
                Err(err) => {
                    warn!("Skipping directory '{}': {}", dir_path, err);
                    summary.skipped += 1;
                    continue;
                }
            };

            let entries = navigator.entries().to_vec();
            let breadcrumbs = navigator.breadcrumbs().clone();
            let mut unpublished = HashSet::new();
            let mut default_text = None;

            for entry in &entries {
                if entry.is_dir() {
                    queue.push_back(entry.path().to_string());
                    continue;
                }

                let text = match self.fetch(&mut navigator, entry.path()) {
                    Ok(text) => text,
                    Err(err) => {
                        if !matches!(err, HostError::Decoding { .. }) {
                            warn!("Skipping file '{}': {}", entry.path(), err);
                        }
                        unpublished.insert(entry.path().to_string());
                        summary.skipped += 1;
                        continue;
                    }
                };

                let page = blob::generate(
                    settings,
                    &self.highlighter,
                    entry.path(),
                    &text,
                    &breadcrumbs,
                );
                self.write_page(&blob_page(entry.path()), page)?;
                summary.files += 1;

                if default_entry.as_ref() == Some(entry) {
                    default_text = Some(text);
                }
            }

            let view = DirectoryView {
                path: &dir_path,
                breadcrumbs: &breadcrumbs,
                entries: &entries,
                unpublished: &unpublished,
                default_document: default_entry
                    .as_ref()
                    .zip(default_text.as_deref()),
            };
            let page = tree::generate(settings, &self.highlighter, &view);
            self.write_page(&tree_page(&dir_path), page)?;
            summary.directories += 1;
        }

        info!(
            "Generated {} directory pages and {} file pages ({} skipped) in {}",
            summary.directories,
            summary.files,
            summary.skipped,
            self.output.display()
        );

        Ok(summary)
    }

    fn fetch(&self, navigator: &mut Navigator, path: &str) -> Result<String, HostError> {
        navigator.open_file(self.host, path)?;
        Ok(navigator
            .current_file()
            .map(|file| file.text().to_string())
            .unwrap_or_default())
    }

    fn write_page(&self, page: &str, markup: Markup) -> Result<()> {
        let target = self.output.join(page);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target, markup.into_string())
            .with_context(|| format!("Failed to write page: {}", target.display()))?;
        info!("Wrote {}", display_relative(&target, &self.output));

        Ok(())
    }
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use tempfile::TempDir;

    fn repo() -> RepoRef {
        RepoRef::new("octo", "handbook")
    }

    fn sample_host() -> MemoryHost {
        MemoryHost::new()
            .with_file(&repo(), "README.md", "# Handbook\n\nSee [docs](docs/).")
            .with_file(&repo(), "src/main.rs", "fn main() {}\n")
            .with_file(&repo(), "docs/guide.md", "## Guide")
            .with_file(&repo(), "docs/logo.png", vec![0x89, b'P', b'N', b'G', 0, 0])
    }

    fn read(dir: &TempDir, page: &str) -> String {
        fs::read_to_string(dir.path().join(page)).expect("page should exist")
    }

    #[test]
    fn test_generate_writes_pages() {
        // Arrange
        let host = sample_host();
        let output = TempDir::new().expect("temp dir");
        let generator = SiteGenerator::new(&host, repo(), output.path());

        // Act
        let summary = generator.generate().expect("Generation should succeed");

        // Assert
        assert_eq!(
            summary,
            SiteSummary {
                directories: 3,
                files: 3,
                skipped: 1,
            }
        );
        for page in [
            "index.html",
            "tree/docs.html",
            "tree/src.html",
            "blob/README.md.html",
            "blob/docs/guide.md.html",
            "blob/src/main.rs.html",
            "assets/site.css",
        ] {
            assert!(output.path().join(page).is_file(), "Missing page: {}", page);
        }
        assert!(!output.path().join("blob/docs/logo.png.html").exists());
    }

    #[test]
    fn test_index_shows_readme() {
        // Arrange
        let host = sample_host();
        let output = TempDir::new().expect("temp dir");

        // Act
        SiteGenerator::new(&host, repo(), output.path())
            .generate()
            .expect("Generation should succeed");
        let index = read(&output, "index.html");

        // Assert
        assert!(index.contains("<h1>Handbook</h1>"), "README rendered on index");
        assert!(index.contains("href=\"tree/docs.html\""), "{}", index);
    }

    #[test]
    fn test_binary_file_listed_without_link() {
        // Arrange
        let host = sample_host();
        let output = TempDir::new().expect("temp dir");

        // Act
        SiteGenerator::new(&host, repo(), output.path())
            .generate()
            .expect("Generation should succeed");
        let docs = read(&output, "tree/docs.html");

        // Assert
        assert!(docs.contains("logo.png"), "Binary file is listed");
        assert!(!docs.contains("blob/docs/logo.png.html"), "Binary file is not linked");
        assert!(docs.contains("<h2>Guide</h2>"), "First file is the default document");
    }

    #[test]
    fn test_site_name_and_theme() {
        // Arrange
        let host = sample_host();
        let output = TempDir::new().expect("temp dir");

        // Act
        SiteGenerator::new(&host, repo(), output.path())
            .with_site_name("Team Handbook")
            .with_theme(Theme::Retro)
            .generate()
            .expect("Generation should succeed");
        let index = read(&output, "index.html");

        // Assert
        assert!(index.contains("<title>Team Handbook - Team Handbook</title>"), "{}", index);
        assert!(index.contains("assets/theme-retro.css"));
    }

    #[test]
    fn test_root_failure_aborts() {
        // Arrange
        let mut host = sample_host();
        host.restrict(&repo());
        let output = TempDir::new().expect("temp dir");

        // Act
        let result = SiteGenerator::new(&host, repo(), output.path()).generate();

        // Assert
        let err = result.expect_err("Restricted root should fail");
        assert!(
            format!("{:#}", err).contains("access denied"),
            "Error should carry the host failure: {:#}",
            err
        );
    }

    #[test]
    fn test_unknown_repository_aborts() {
        // Arrange
        let host = sample_host();
        let output = TempDir::new().expect("temp dir");

        // Act
        let result = SiteGenerator::new(&host, RepoRef::new("octo", "missing"), output.path())
            .generate();

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_index_path() {
        // Arrange
        let host = MemoryHost::new();
        let generator = SiteGenerator::new(&host, repo(), "out");

        // Act & Assert
        assert_eq!(generator.index_path(), PathBuf::from("out/index.html"));
    }
}
