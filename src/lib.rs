//! Markdown documentation browser for Git repositories.

mod assets;
pub mod components;
mod config;
mod error;
mod filetype;
mod highlight;
mod host;
mod markdown;
mod navigator;
pub mod pages;
mod path;
mod site;
mod tree;

pub use assets::{stylesheets, write_css_assets};
pub use config::{Config, Theme};
pub use error::HostError;
pub use filetype::{DocumentKind, decode_text, is_binary, is_markdown};
pub use highlight::Highlighter;
pub use host::{GitHost, MemoryHost, RepoRef, RepositoryHost};
pub use markdown::{
    InlineSpan, LinkResolver, MarkdownRenderer, RenderedBlock, SpanStyle, parse_inline, render,
};
pub use navigator::{
    FileOutcome, FileRequest, ListingOutcome, ListingRequest, Navigator, OpenFile, Selection,
};
pub use path::{
    Breadcrumb, BreadcrumbTrail, blob_page, build_breadcrumbs, calculate_depth, normalize_path,
    parent_path, tree_page,
};
pub use site::{SiteGenerator, SiteSummary};
pub use tree::{EntryKind, README_NAME, RepositoryEntry, select_default_entry, sort_entries};
