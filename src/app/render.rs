//! Terminal rendering for converted guide blocks.
//!
//! Rendering consumes structured [`Block`] values only; raw model text never
//! reaches the terminal as markup.

use crate::domain::markup::{Block, Span, Style};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Render blocks as terminal text, with ANSI styling when `styled` is set.
pub fn render_blocks(blocks: &[Block], styled: bool) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let text = render_spans(spans, styled);
                let underline = if *level == 2 { '=' } else { '-' };
                out.push('\n');
                out.push_str(&text);
                out.push('\n');
                out.extend(std::iter::repeat_n(underline, plain_len(spans)));
                out.push('\n');
            }
            Block::Paragraph(spans) => {
                out.push_str(&render_spans(spans, styled));
                out.push('\n');
            }
            Block::List { ordered, items } => {
                for (index, item) in items.iter().enumerate() {
                    if *ordered {
                        out.push_str(&format!("  {}. ", index + 1));
                    } else {
                        out.push_str("  • ");
                    }
                    out.push_str(&render_spans(item, styled));
                    out.push('\n');
                }
            }
        }
    }
    out
}

fn render_spans(spans: &[Span], styled: bool) -> String {
    let mut out = String::new();
    for span in spans {
        if !styled {
            out.push_str(&span.text);
            continue;
        }
        match span.style {
            Style::Plain => out.push_str(&span.text),
            Style::Bold => {
                out.push_str(BOLD);
                out.push_str(&span.text);
                out.push_str(RESET);
            }
            Style::Italic => {
                out.push_str(ITALIC);
                out.push_str(&span.text);
                out.push_str(RESET);
            }
        }
    }
    out
}

fn plain_len(spans: &[Span]) -> usize {
    spans.iter().map(|span| span.text.chars().count()).sum()
}
