//! Page generation modules for different view types
//!
//! Directory pages and file pages share the layout and navigation
//! components; each module renders one page type from data the site
//! generator has already fetched.

pub mod blob;
pub mod tree;

use crate::config::Theme;

/// Site-wide settings shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct PageSettings<'a> {
    pub site_name: &'a str,
    pub theme: Theme,
}
