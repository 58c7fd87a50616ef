// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Markdown-subset renderer for model replies.
//!
//! The recognized dialect is deliberately small: `**bold**` spans, ordered
//! list lines (`1. item`), unordered list lines (`* item`), and plain
//! paragraphs.  Everything else passes through as paragraph text.
//!
//! Rendering is a two-stage pipeline:
//!
//! ```text
//! text ──tag_blocks()──▶ Vec<Block> ──blocks_to_html()──▶ String
//! ```
//!
//! [`tag_blocks`] is a finite-state tagger over physical lines with states
//! `none | ordered | unordered` for the currently open list.  A line that is
//! not a list item (including a blank one) closes the open list, so two
//! runs of items separated by plain text or a blank line become two separate
//! lists.  [`blocks_to_html`] then flattens the blocks; because open/close
//! decisions were made during tagging, the HTML is always well formed with
//! respect to list nesting.

use std::sync::OnceLock;

use regex::Regex;

/// Which kind of list a run of items belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// One classified block of output.  Transient; produced per render call.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A plain text line, already carrying inline markup.
    Paragraph(String),
    /// A maximal run of same-kind list items.
    List { kind: ListKind, items: Vec<String> },
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").unwrap())
}

fn ordered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\.\s*(.*)").unwrap())
}

fn unordered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\*\s*(.*)").unwrap())
}

/// Replace every non-greedy `**X**` span with `<strong>X</strong>`.
///
/// Runs before block classification so that a bold span at line start is not
/// mistaken for an unordered list marker.
fn apply_inline(line: &str) -> String {
    bold_re().replace_all(line, "<strong>$1</strong>").into_owned()
}

/// Classify the input into blocks, one physical line at a time.
///
/// The whole input is trimmed first, so leading/trailing blank lines never
/// produce output and an all-whitespace input yields no blocks.  Within the
/// input, lines are matched literally: an indented list marker is ordinary
/// paragraph text.  The numeric value of an ordered marker is discarded;
/// only the marker's presence matters, so `7.` and `3.` still form one list.
pub fn tag_blocks(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut open: Option<(ListKind, Vec<String>)> = None;

    for raw in text.trim().lines() {
        let line = apply_inline(raw);

        let item = if let Some(caps) = ordered_re().captures(&line) {
            Some((ListKind::Ordered, caps[2].to_string()))
        } else if let Some(caps) = unordered_re().captures(&line) {
            Some((ListKind::Unordered, caps[1].to_string()))
        } else {
            None
        };

        match item {
            Some((kind, text)) => match &mut open {
                Some((k, items)) if *k == kind => items.push(text),
                _ => {
                    close_list(&mut blocks, &mut open);
                    open = Some((kind, vec![text]));
                }
            },
            None => {
                close_list(&mut blocks, &mut open);
                if !line.trim().is_empty() {
                    blocks.push(Block::Paragraph(line));
                }
            }
        }
    }

    close_list(&mut blocks, &mut open);
    blocks
}

fn close_list(blocks: &mut Vec<Block>, open: &mut Option<(ListKind, Vec<String>)>) {
    if let Some((kind, items)) = open.take() {
        blocks.push(Block::List { kind, items });
    }
}

/// Flatten classified blocks into an HTML fragment.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::Paragraph(text) => {
                html.push_str("<p>");
                html.push_str(text);
                html.push_str("</p>");
            }
            Block::List { kind, items } => {
                let tag = match kind {
                    ListKind::Ordered => "ol",
                    ListKind::Unordered => "ul",
                };
                html.push_str(&format!("<{tag}>"));
                for item in items {
                    html.push_str("<li>");
                    html.push_str(item);
                    html.push_str("</li>");
                }
                html.push_str(&format!("</{tag}>"));
            }
        }
    }
    html
}

/// Render the markdown subset to an HTML fragment.
pub fn render_html(text: &str) -> String {
    blocks_to_html(&tag_blocks(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_span_becomes_strong() {
        assert_eq!(render_html("**bold**"), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn multiple_bold_spans_per_line() {
        assert_eq!(
            render_html("say **a** then **b**"),
            "<p>say <strong>a</strong> then <strong>b</strong></p>"
        );
    }

    #[test]
    fn ordered_items_merge_into_one_list() {
        assert_eq!(
            render_html("1. first\n2. second"),
            "<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn unordered_items_merge_into_one_list() {
        assert_eq!(render_html("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn paragraph_interrupts_ordered_list() {
        assert_eq!(
            render_html("1. a\ntext\n2. b"),
            "<ol><li>a</li></ol><p>text</p><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn list_type_change_closes_previous_list() {
        assert_eq!(
            render_html("1. a\n* b"),
            "<ol><li>a</li></ol><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn blank_line_closes_list_without_output() {
        assert_eq!(
            render_html("1. a\n\n2. b"),
            "<ol><li>a</li></ol><ol><li>b</li></ol>"
        );
    }

    #[test]
    fn empty_and_whitespace_input_render_empty() {
        assert_eq!(render_html(""), "");
        assert_eq!(render_html("   \n \n\t"), "");
    }

    #[test]
    fn interior_blank_lines_produce_no_paragraphs() {
        assert_eq!(render_html("a\n\n\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn ordered_marker_numbers_are_not_renumbered_or_required_sequential() {
        assert_eq!(
            render_html("7. a\n3. b"),
            "<ol><li>a</li><li>b</li></ol>"
        );
    }

    #[test]
    fn indented_marker_is_paragraph_text() {
        // Only the whole input is trimmed; interior lines match literally.
        assert_eq!(
            render_html("a\n  * b"),
            "<p>a</p><p>  * b</p>"
        );
    }

    #[test]
    fn marker_without_space_still_matches() {
        assert_eq!(render_html("1.item"), "<ol><li>item</li></ol>");
        assert_eq!(render_html("*item"), "<ul><li>item</li></ul>");
    }

    #[test]
    fn bold_inside_list_item() {
        assert_eq!(
            render_html("1. **a** b"),
            "<ol><li><strong>a</strong> b</li></ol>"
        );
    }

    #[test]
    fn bold_at_line_start_is_not_a_list_marker() {
        // Inline replacement runs first, so the leading ** never reaches
        // the unordered-marker pattern.
        assert_eq!(render_html("**x** y"), "<p><strong>x</strong> y</p>");
    }

    #[test]
    fn final_list_is_closed() {
        assert_eq!(render_html("text\n* a"), "<p>text</p><ul><li>a</li></ul>");
    }

    #[test]
    fn tagger_exposes_block_structure() {
        let blocks = tag_blocks("intro\n1. a\n1. b");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], Block::Paragraph("intro".into()));
        assert_eq!(
            blocks[1],
            Block::List {
                kind: ListKind::Ordered,
                items: vec!["a".into(), "b".into()]
            }
        );
    }
}
