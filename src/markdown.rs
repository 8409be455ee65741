//! Markdown rendering.
//!
//! Markdown text is first classified line by line into a flat sequence of
//! typed blocks ([`render`]), then converted to HTML by [`MarkdownRenderer`],
//! which resolves repository-relative links through a [`LinkResolver`] and
//! highlights fenced code.

mod blocks;
mod links;
mod parser;
mod renderer;

pub use blocks::{InlineSpan, RenderedBlock, SpanStyle};
pub use links::LinkResolver;
pub use parser::{parse_inline, render};
pub use renderer::MarkdownRenderer;
