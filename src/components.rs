//! Reusable HTML components for page generation
//!
//! Component functions shared by directory and file pages: layout,
//! breadcrumb navigation, listing rows, and entry icons.

pub mod file_list;
pub mod icons;
pub mod layout;
pub mod nav;
