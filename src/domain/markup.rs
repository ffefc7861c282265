//! Conversion of model-generated markdown-like text into structured display
//! blocks.
//!
//! The rule set is deliberately small and pattern-based rather than a full
//! markdown parser: `##`/`###` headings at line start, `**bold**` and
//! `*italic*` inline runs (greedy first-match, not nested-aware), `- `/`* `
//! unordered and `1. ` ordered list items, blank lines terminating lists.
//! Everything else degrades to a plain paragraph. The output is structured
//! data so the rendering layer never interprets raw model text as markup.

/// Inline style of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Bold,
    Italic,
}

/// A run of inline text carrying a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub style: Style,
    pub text: String,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { style: Style::Plain, text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self { style: Style::Bold, text: text.into() }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { style: Style::Italic, text: text.into() }
    }
}

/// A structured display block produced by [`convert`].
///
/// List items are grouped under one `List` block per run of same-kind items;
/// a blank line or a kind switch ends the current group and starts a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    List { ordered: bool, items: Vec<Vec<Span>> },
}

/// Convert raw generated text into display blocks.
///
/// Total over all inputs: unrecognized syntax becomes paragraph text, empty
/// input yields no blocks, and no input can make this fail.
///
/// Emphasis substitution happens before list classification, so a leading
/// `* ` that pairs with a later `*` on the same line reads as an italic run,
/// not a bullet.
pub fn convert(raw: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    // The one piece of cross-line state: the currently open list, if any.
    let mut list: Option<(bool, Vec<Vec<Span>>)> = None;

    for line in raw.lines() {
        // Headings bind to the raw line start, before any trimming, and are
        // never wrapped in a paragraph.
        if let Some(rest) = line.strip_prefix("### ") {
            close_list(&mut blocks, &mut list);
            blocks.push(Block::Heading { level: 3, spans: parse_inline(rest) });
            continue;
        }
        if let Some(rest) = line.strip_prefix("## ") {
            close_list(&mut blocks, &mut list);
            blocks.push(Block::Heading { level: 2, spans: parse_inline(rest) });
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            // A blank line closes any open list and produces nothing itself.
            close_list(&mut blocks, &mut list);
            continue;
        }

        match list_item(&parse_inline(trimmed)) {
            Some((ordered, item)) => push_item(&mut blocks, &mut list, ordered, item),
            None => {
                close_list(&mut blocks, &mut list);
                blocks.push(Block::Paragraph(parse_inline(line)));
            }
        }
    }

    close_list(&mut blocks, &mut list);
    blocks
}

/// Recognize a list item from the spans of a trimmed line.
///
/// The marker must open a plain run: a `* ` consumed by emphasis
/// substitution no longer counts as a bullet.
fn list_item(spans: &[Span]) -> Option<(bool, Vec<Span>)> {
    let first = spans.first()?;
    if first.style != Style::Plain {
        return None;
    }
    if let Some(rest) = first.text.strip_prefix("- ").or_else(|| first.text.strip_prefix("* ")) {
        return Some((false, behind_marker(spans, rest)));
    }
    if let Some(rest) = strip_ordered_marker(&first.text) {
        return Some((true, behind_marker(spans, rest)));
    }
    None
}

/// Item spans with the marker removed from the opening run.
fn behind_marker(spans: &[Span], rest: &str) -> Vec<Span> {
    let mut item = Vec::with_capacity(spans.len());
    if !rest.is_empty() {
        item.push(Span::plain(rest));
    }
    item.extend(spans[1..].iter().cloned());
    item
}

/// Strip a `<digits>. ` marker, returning the item text.
fn strip_ordered_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

fn push_item(
    blocks: &mut Vec<Block>,
    list: &mut Option<(bool, Vec<Vec<Span>>)>,
    ordered: bool,
    item: Vec<Span>,
) {
    match list {
        Some((kind, items)) if *kind == ordered => items.push(item),
        _ => {
            // Kind switch: the open list of the other kind ends here.
            close_list(blocks, list);
            *list = Some((ordered, vec![item]));
        }
    }
}

fn close_list(blocks: &mut Vec<Block>, list: &mut Option<(bool, Vec<Vec<Span>>)>) {
    if let Some((ordered, items)) = list.take() {
        blocks.push(Block::List { ordered, items });
    }
}

/// Split a line into styled spans.
///
/// Bold runs are extracted first across the line, then italic runs within
/// the remaining plain segments, mirroring first-match substitution order.
/// Markers around empty text are consumed without emitting a span.
fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some((before, inner, after)) = find_delimited(rest, "**") {
        push_italics(&mut spans, before);
        if !inner.is_empty() {
            spans.push(Span::bold(inner));
        }
        rest = after;
    }
    push_italics(&mut spans, rest);
    spans
}

fn push_italics(spans: &mut Vec<Span>, mut text: &str) {
    while let Some((before, inner, after)) = find_delimited(text, "*") {
        if !before.is_empty() {
            spans.push(Span::plain(before));
        }
        if !inner.is_empty() {
            spans.push(Span::italic(inner));
        }
        text = after;
    }
    if !text.is_empty() {
        spans.push(Span::plain(text));
    }
}

/// Find the first delimited run: `(before, inner, after)`.
fn find_delimited<'a>(text: &'a str, delim: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let start = text.find(delim)?;
    let after_open = &text[start + delim.len()..];
    let end = after_open.find(delim)?;
    Some((&text[..start], &after_open[..end], &after_open[end + delim.len()..]))
}
