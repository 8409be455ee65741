//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::Theme;
use crate::path::root_prefix;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");
const FILE_LIST: &str = include_str!("../assets/components/file-list.css");

const TREE_PAGE: &str = include_str!("../assets/page-tree.css");
const BLOB_PAGE: &str = include_str!("../assets/page-blob.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

const THEME_DEFAULT: &str = include_str!("../assets/themes/default.css");
const THEME_DARK: &str = include_str!("../assets/themes/dark.css");
const THEME_DOCS: &str = include_str!("../assets/themes/docs.css");
const THEME_RETRO: &str = include_str!("../assets/themes/retro.css");

/// Directory under the site root that holds stylesheets.
pub const ASSETS_DIR: &str = "assets";

const SITE_CSS: &str = "site.css";
const MARKDOWN_CSS: &str = "markdown.css";

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(
        assets_dir,
        SITE_CSS,
        &[BASE, LAYOUT, NAV, FILE_LIST, TREE_PAGE, BLOB_PAGE],
    )?;
    write_bundled(assets_dir, MARKDOWN_CSS, &[MARKDOWN])?;

    for (theme, css) in [
        (Theme::Default, THEME_DEFAULT),
        (Theme::Dark, THEME_DARK),
        (Theme::Docs, THEME_DOCS),
        (Theme::Retro, THEME_RETRO),
    ] {
        write_bundled(assets_dir, theme.stylesheet(), &[css])?;
    }

    Ok(())
}

/// Stylesheet hrefs for a page at `depth`, theme last so it can override.
pub fn stylesheets(theme: Theme, depth: usize) -> Vec<String> {
    let prefix = root_prefix(depth);
    [SITE_CSS, MARKDOWN_CSS, theme.stylesheet()]
        .iter()
        .map(|name| format!("{}{}/{}", prefix, ASSETS_DIR, name))
        .collect()
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
