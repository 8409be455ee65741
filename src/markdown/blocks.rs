//! Rendered Markdown node types.

/// Styling of an inline run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
}

/// Styled run of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    text: String,
    style: SpanStyle,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Code)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, SpanStyle::Link { url: url.into() })
    }

    /// Visible text (the label, for links).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &SpanStyle {
        &self.style
    }
}

/// Top-level structural unit of a rendered document, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    /// Heading of level 1 to 3.
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph { spans: Vec<InlineSpan> },
    /// One list line; consecutive items are not grouped.
    ListItem { ordered: bool, spans: Vec<InlineSpan> },
    /// Fenced code, verbatim. `language` is the fence info string.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
}

impl RenderedBlock {
    /// Inline spans of the block; code blocks have none.
    pub fn spans(&self) -> &[InlineSpan] {
        match self {
            Self::Heading { spans, .. }
            | Self::Paragraph { spans }
            | Self::ListItem { spans, .. } => spans,
            Self::CodeBlock { .. } => &[],
        }
    }

    /// Text of the block with all styling dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Self::CodeBlock { text, .. } => text.clone(),
            _ => self.spans().iter().map(InlineSpan::text).collect(),
        }
    }
}
