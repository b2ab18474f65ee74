//! Source text → ordered render units.
//!
//! Table rows are grouped contiguously: a group closes when a non-table-row
//! line arrives or the input ends. Separator lines are skipped without
//! closing the group, since a real markdown table keeps its separator
//! between header and body.

use crate::classify::{LineKind, classify_line};

/// Style tag for a paragraph block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    /// Session headings and other `**…**` lines, rendered in bold.
    Bold,
    /// List items, rendered indented with a `•` glyph.
    Bullet,
    /// Everything else.
    Plain,
}

/// One renderable unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph { style: ParagraphStyle, text: String },
    /// Rows in input order; the first row is the header.
    Table { rows: Vec<Vec<String>> },
}

/// Build the block sequence for one source text.
///
/// Column counts are passed through untouched here — consistency within a
/// group is checked at table assembly time in [`crate::layout`], where a
/// mismatch is an explicit error rather than a silent fix.
pub fn build_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        match classify_line(line) {
            LineKind::TableRow(cells) => table_rows.push(cells),
            LineKind::Separator => {}
            LineKind::Bullet(item) => {
                close_open_table(&mut blocks, &mut table_rows);
                blocks.push(Block::Paragraph {
                    style: ParagraphStyle::Bullet,
                    text: format!("\u{2022} {item}"),
                });
            }
            LineKind::Bold(text) => {
                close_open_table(&mut blocks, &mut table_rows);
                blocks.push(Block::Paragraph {
                    style: ParagraphStyle::Bold,
                    text,
                });
            }
            LineKind::Plain(text) => {
                close_open_table(&mut blocks, &mut table_rows);
                blocks.push(Block::Paragraph {
                    style: ParagraphStyle::Plain,
                    text,
                });
            }
        }
    }

    close_open_table(&mut blocks, &mut table_rows);
    blocks
}

/// Emit the open table group, if any. Zero-row groups are never emitted.
fn close_open_table(blocks: &mut Vec<Block>, table_rows: &mut Vec<Vec<String>>) {
    if !table_rows.is_empty() {
        blocks.push(Block::Table {
            rows: std::mem::take(table_rows),
        });
    }
}
