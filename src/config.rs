//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::host::RepoRef;

/// Visual theme of the generated site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Docs,
    Retro,
}

impl Theme {
    /// File name of the theme stylesheet under `assets/`.
    pub fn stylesheet(&self) -> &'static str {
        match self {
            Theme::Default => "theme-default.css",
            Theme::Dark => "theme-dark.css",
            Theme::Docs => "theme-docs.css",
            Theme::Retro => "theme-retro.css",
        }
    }
}

/// Command line configuration for GitDocify.
#[derive(Debug, Clone, Parser)]
#[command(name = "gitdocify", version, about, long_about = None)]
pub struct Config {
    /// Repository path
    #[arg(default_value = ".")]
    pub repo: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "site")]
    pub output: PathBuf,

    /// Site name shown in titles and the root breadcrumb
    #[arg(long)]
    pub name: Option<String>,

    /// Repository owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Branch, tag, or reference to publish (defaults to HEAD)
    #[arg(long = "ref")]
    pub git_ref: Option<String>,

    /// Site theme
    #[arg(long, value_enum, default_value_t = Theme::Default)]
    pub theme: Theme,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if repository path does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.repo.exists() {
            bail!("Repository path does not exist: {}", self.repo.display());
        }

        Ok(())
    }

    /// Returns site name from configuration or repository directory.
    ///
    /// # Errors
    ///
    /// Returns error if repository path has no name component or contains invalid UTF8.
    pub fn site_name(&self) -> Result<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => self.repository_name(),
        }
    }

    /// Returns the repository directory name.
    ///
    /// # Errors
    ///
    /// Returns error if repository path has no name component or contains invalid UTF8.
    pub fn repository_name(&self) -> Result<String> {
        let path = self
            .repo
            .canonicalize()
            .unwrap_or_else(|_| self.repo.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract repository name from path: {}", path.display()))
            .map(String::from)
    }

    /// Identity the repository is served under.
    ///
    /// Named after the repository directory; `--name` only changes the
    /// displayed site name.
    ///
    /// # Errors
    ///
    /// Returns error if no repository name can be derived.
    pub fn repo_ref(&self) -> Result<RepoRef> {
        let owner = self.owner.clone().unwrap_or_default();
        Ok(RepoRef::new(owner, self.repository_name()?))
    }

    /// Log level selected by the verbosity flag.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
