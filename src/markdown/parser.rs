//! Line-oriented Markdown classification.
//!
//! Every line is classified exactly once by the first matching rule:
//! fenced code, heading, list item, then paragraph. Blank lines produce
//! nothing. Inline markup is scanned within a single line only, so no rule
//! can match across a newline. Unmatched markup stays literal text.

use super::blocks::{InlineSpan, RenderedBlock, SpanStyle};

const FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 3;

/// Renders Markdown into a flat block sequence.
///
/// Total and deterministic: every string is valid input and identical input
/// always yields identical output.
///
/// # Examples
///
/// ```
/// use gitdocify::{InlineSpan, RenderedBlock, render};
///
/// let blocks = render("# Title\n\nSome **bold** text");
/// assert_eq!(
///     blocks[0],
///     RenderedBlock::Heading { level: 1, spans: vec![InlineSpan::plain("Title")] }
/// );
/// assert_eq!(blocks[1].spans()[1], InlineSpan::bold("bold"));
/// ```
pub fn render(markdown: &str) -> Vec<RenderedBlock> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        if let Some(fence) = fenced_code(&lines[index..]) {
            blocks.push(fence.block);
            blocks.extend(classify_line(fence.trailing));
            index += fence.consumed;
            continue;
        }

        if let Some(block) = classify_line(lines[index]) {
            blocks.push(block);
        }
        index += 1;
    }

    blocks
}

/// A fenced code region and the text following its closing fence.
struct Fence<'a> {
    block: RenderedBlock,
    consumed: usize,
    trailing: &'a str,
}

/// Matches a fenced code region starting at the first line.
///
/// The fence closes at the first following line that starts with a fence,
/// so separate regions never merge. An unclosed fence is not a fence. Text
/// after the closing backticks is returned as `trailing` for ordinary
/// classification.
fn fenced_code<'a>(lines: &[&'a str]) -> Option<Fence<'a>> {
    let opening = lines.first().copied()?.strip_prefix(FENCE)?;

    if let Some(end) = opening.find(FENCE) {
        return Some(Fence {
            block: RenderedBlock::CodeBlock {
                language: None,
                text: opening[..end].to_string(),
            },
            consumed: 1,
            trailing: opening[end + FENCE.len()..].trim_start(),
        });
    }

    let body = &lines[1..];
    let close = body.iter().position(|line| line.starts_with(FENCE))?;

    let info = opening.trim();
    Some(Fence {
        block: RenderedBlock::CodeBlock {
            language: (!info.is_empty()).then(|| info.to_string()),
            text: body[..close].join("\n"),
        },
        consumed: close + 2,
        trailing: body[close][FENCE.len()..].trim_start(),
    })
}

fn classify_line(line: &str) -> Option<RenderedBlock> {
    if line.trim().is_empty() {
        return None;
    }

    if let Some((level, text)) = heading(line) {
        return Some(RenderedBlock::Heading {
            level,
            spans: parse_inline(text),
        });
    }

    if let Some(text) = line.strip_prefix("- ") {
        return Some(RenderedBlock::ListItem {
            ordered: false,
            spans: parse_inline(text),
        });
    }

    if let Some(text) = ordered_item(line) {
        return Some(RenderedBlock::ListItem {
            ordered: true,
            spans: parse_inline(text),
        });
    }

    Some(RenderedBlock::Paragraph {
        spans: parse_inline(line),
    })
}

/// `#`, `##`, or `###` followed by a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&hashes) {
        return None;
    }

    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text))
}

/// A single digit followed by `. `.
fn ordered_item(line: &str) -> Option<&str> {
    if !line.bytes().next()?.is_ascii_digit() {
        return None;
    }
    line[1..].strip_prefix(". ")
}

/// Splits one line of text into styled spans.
///
/// Scans left to right. At each position code spans are tried first, then
/// bold, italic, and links; anything unmatched is plain text. Links inside
/// bold or italic text split it into styled pieces around the link. Adjacent
/// plain characters are merged into one span.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let matched = inline_code(rest)
            .map(single)
            .or_else(|| bold(rest))
            .or_else(|| italic(rest))
            .or_else(|| link(rest).map(single));

        match matched {
            Some((matched_spans, consumed)) => {
                if !plain.is_empty() {
                    spans.push(InlineSpan::plain(std::mem::take(&mut plain)));
                }
                spans.extend(matched_spans);
                rest = &rest[consumed..];
            }
            None => {
                plain.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    if !plain.is_empty() {
        spans.push(InlineSpan::plain(plain));
    }

    spans
}

fn single((span, consumed): (InlineSpan, usize)) -> (Vec<InlineSpan>, usize) {
    (vec![span], consumed)
}

/// Non-empty text between the first pair of `marker`s at the start of `rest`.
///
/// Returns the inner text and the byte length consumed including markers.
fn delimited<'a>(rest: &'a str, marker: &str) -> Option<(&'a str, usize)> {
    let after = rest.strip_prefix(marker)?;
    let end = after.find(marker)?;
    if end == 0 {
        return None;
    }
    Some((&after[..end], end + marker.len() * 2))
}

fn inline_code(rest: &str) -> Option<(InlineSpan, usize)> {
    delimited(rest, "`").map(|(inner, consumed)| (InlineSpan::code(inner), consumed))
}

fn bold(rest: &str) -> Option<(Vec<InlineSpan>, usize)> {
    delimited(rest, "**").map(|(inner, consumed)| (emphasis(inner, SpanStyle::Bold), consumed))
}

fn italic(rest: &str) -> Option<(Vec<InlineSpan>, usize)> {
    delimited(rest, "*").map(|(inner, consumed)| (emphasis(inner, SpanStyle::Italic), consumed))
}

/// Styles emphasised text, splitting out any links it contains.
fn emphasis(inner: &str, style: SpanStyle) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    while offset < inner.len() {
        match link(&inner[offset..]) {
            Some((span, consumed)) => {
                if start < offset {
                    spans.push(InlineSpan::new(&inner[start..offset], style.clone()));
                }
                spans.push(span);
                offset += consumed;
                start = offset;
            }
            None => {
                offset += inner[offset..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if start < inner.len() {
        spans.push(InlineSpan::new(&inner[start..], style));
    }

    spans
}

/// `[label](url)`: label runs to the first `](`, url to the next `)`.
fn link(rest: &str) -> Option<(InlineSpan, usize)> {
    let after = rest.strip_prefix('[')?;
    let label_end = after.find("](")?;
    let url_start = label_end + 2;
    let url_len = after[url_start..].find(')')?;

    let label = &after[..label_end];
    let url = &after[url_start..url_start + url_len];

    Some((InlineSpan::link(label, url), url_start + url_len + 2))
}
