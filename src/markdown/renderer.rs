//! HTML rendering of classified Markdown blocks.

use log::{debug, warn};
use maud::{Markup, PreEscaped, html};

use super::blocks::{InlineSpan, RenderedBlock, SpanStyle};
use super::links::{LinkResolver, is_unsafe_link};
use super::parser;
use crate::highlight::Highlighter;

/// Renders Markdown to HTML markup.
///
/// Blocks come from [`parser::render`]. Consecutive list items of the same
/// kind are grouped into one `ul`/`ol`. Fenced code with a known language is
/// highlighted with `hljs-*` classes; unknown languages and highlighting
/// failures fall back to escaped plain text. When a [`LinkResolver`] is set,
/// relative links point at generated pages.
pub struct MarkdownRenderer<'a> {
    highlighter: &'a Highlighter,
    link_resolver: Option<LinkResolver>,
}

/// Run of blocks rendered as one element.
enum Group<'b> {
    Block(&'b RenderedBlock),
    List {
        ordered: bool,
        items: Vec<&'b [InlineSpan]>,
    },
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer that leaves relative links unchanged.
    pub fn new(highlighter: &'a Highlighter) -> Self {
        Self {
            highlighter,
            link_resolver: None,
        }
    }

    /// Creates renderer that rewrites repository links through `resolver`.
    pub fn with_link_resolver(highlighter: &'a Highlighter, resolver: LinkResolver) -> Self {
        Self {
            highlighter,
            link_resolver: Some(resolver),
        }
    }

    /// Renders Markdown content.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitdocify::{Highlighter, MarkdownRenderer};
    ///
    /// let highlighter = Highlighter::new();
    /// let html = MarkdownRenderer::new(&highlighter).render("# Hello").into_string();
    /// assert!(html.contains("<h1>Hello</h1>"));
    /// ```
    pub fn render(&self, content: &str) -> Markup {
        self.render_blocks(&parser::render(content))
    }

    /// Renders already classified blocks.
    pub fn render_blocks(&self, blocks: &[RenderedBlock]) -> Markup {
        html! {
            div class="markdown-body" {
                @for group in group_blocks(blocks) {
                    (self.group_markup(&group))
                }
            }
        }
    }

    fn group_markup(&self, group: &Group<'_>) -> Markup {
        match group {
            Group::List {
                ordered: true,
                items,
            } => html! {
                ol {
                    @for spans in items { li { (self.spans_markup(spans)) } }
                }
            },
            Group::List {
                ordered: false,
                items,
            } => html! {
                ul {
                    @for spans in items { li { (self.spans_markup(spans)) } }
                }
            },
            Group::Block(block) => self.block_markup(block),
        }
    }

    fn block_markup(&self, block: &RenderedBlock) -> Markup {
        match block {
            RenderedBlock::Heading { level: 1, spans } => html! { h1 { (self.spans_markup(spans)) } },
            RenderedBlock::Heading { level: 2, spans } => html! { h2 { (self.spans_markup(spans)) } },
            RenderedBlock::Heading { spans, .. } => html! { h3 { (self.spans_markup(spans)) } },
            RenderedBlock::Paragraph { spans } => html! { p { (self.spans_markup(spans)) } },
            RenderedBlock::ListItem { ordered, spans } => {
                self.group_markup(&Group::List {
                    ordered: *ordered,
                    items: vec![spans.as_slice()],
                })
            }
            RenderedBlock::CodeBlock { language, text } => self.code_markup(language.as_deref(), text),
        }
    }

    fn code_markup(&self, language: Option<&str>, text: &str) -> Markup {
        let class = language.map(|lang| format!("language-{}", lang));
        let highlighted = language.and_then(|lang| {
            match self.highlighter.highlight_token(text, lang) {
                Ok(html) => html,
                Err(err) => {
                    warn!("Falling back to plain text for '{}' block: {:#}", lang, err);
                    None
                }
            }
        });

        html! {
            pre {
                code class=[class] {
                    @match highlighted {
                        Some(html) => (PreEscaped(html)),
                        None => (text),
                    }
                }
            }
        }
    }

    fn spans_markup(&self, spans: &[InlineSpan]) -> Markup {
        html! {
            @for span in spans {
                @match span.style() {
                    SpanStyle::Plain => (span.text()),
                    SpanStyle::Bold => strong { (span.text()) },
                    SpanStyle::Italic => em { (span.text()) },
                    SpanStyle::Code => code { (span.text()) },
                    SpanStyle::Link { url } => a href=(self.href(url)) { (span.text()) },
                }
            }
        }
    }

    fn href(&self, url: &str) -> String {
        match &self.link_resolver {
            Some(resolver) => resolver.resolve(url).unwrap_or_else(|err| {
                debug!("Unresolvable link '{}': {:#}", url, err);
                "#".to_string()
            }),
            None if is_unsafe_link(url) => "#".to_string(),
            None => url.to_string(),
        }
    }
}

fn group_blocks(blocks: &[RenderedBlock]) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();

    for block in blocks {
        if let RenderedBlock::ListItem { ordered, spans } = block {
            if let Some(Group::List {
                ordered: open,
                items,
            }) = groups.last_mut()
                && *open == *ordered
            {
                items.push(spans.as_slice());
                continue;
            }
            groups.push(Group::List {
                ordered: *ordered,
                items: vec![spans.as_slice()],
            });
        } else {
            groups.push(Group::Block(block));
        }
    }

    groups
}
