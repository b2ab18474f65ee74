//! Places blocks onto fixed US Letter pages.
//!
//! Everything is resolved into positioned page items before any PDF object
//! is created, so a layout failure never leaves a partial artifact. Items
//! carry top-down y coordinates; the PDF backend flips them into PDF space.

use crate::blocks::{Block, ParagraphStyle};
use crate::error::ExportError;
use crate::styles::{Color, DocumentStyles};

/// Base-14 font for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
}

/// One drawable item, positioned in top-down page coordinates.
#[derive(Debug, Clone)]
pub(crate) enum PageItem {
    Text {
        x: f32,
        /// Top edge of the line box.
        y: f32,
        size: f32,
        font: Font,
        color: Color,
        content: String,
    },
    /// Filled rectangle; y is the top edge.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Color,
    },
    /// Stroked rectangle outline (one table cell border).
    Frame {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub(crate) struct Page {
    pub items: Vec<PageItem>,
}

/// Lay out all blocks, flowing onto new pages when vertical space runs out.
/// Always yields at least one page, so empty input still produces a valid
/// (blank) document.
pub(crate) fn layout_document(
    blocks: &[Block],
    styles: &DocumentStyles,
) -> Result<Vec<Page>, ExportError> {
    let mut layouter = Layouter::new(styles);

    for block in blocks {
        match block {
            Block::Paragraph { style, text } => layouter.place_paragraph(*style, text),
            Block::Table { rows } => layouter.place_table(rows)?,
        }
    }

    Ok(layouter.finish())
}

struct Layouter<'a> {
    styles: &'a DocumentStyles,
    pages: Vec<Page>,
    current: Page,
    /// Top-down cursor on the current page.
    cursor: f32,
}

impl<'a> Layouter<'a> {
    fn new(styles: &'a DocumentStyles) -> Self {
        Self {
            styles,
            pages: Vec::new(),
            current: Page::default(),
            cursor: styles.margin,
        }
    }

    fn content_width(&self) -> f32 {
        DocumentStyles::PAGE_WIDTH - 2.0 * self.styles.margin
    }

    fn bottom(&self) -> f32 {
        DocumentStyles::PAGE_HEIGHT - self.styles.margin
    }

    /// Break to a new page unless `height` fits below the cursor. An item
    /// taller than a full page is placed on a fresh page regardless.
    fn ensure_room(&mut self, height: f32) {
        if self.cursor + height > self.bottom() && self.cursor > self.styles.margin {
            let finished = std::mem::take(&mut self.current);
            self.pages.push(finished);
            self.cursor = self.styles.margin;
        }
    }

    fn place_paragraph(&mut self, style: ParagraphStyle, text: &str) {
        let size = self.styles.body_size;
        let line_height = size * 1.2;
        let font = match style {
            ParagraphStyle::Bold => Font::Bold,
            ParagraphStyle::Bullet | ParagraphStyle::Plain => Font::Regular,
        };
        let indent = match style {
            ParagraphStyle::Bullet => self.styles.bullet_indent,
            _ => 0.0,
        };
        let x = self.styles.margin + indent;
        let max_width = self.content_width() - indent;

        for line in wrap_text(text, size, font, max_width) {
            self.ensure_room(line_height);
            self.current.items.push(PageItem::Text {
                x,
                y: self.cursor,
                size,
                font,
                color: Color::BLACK,
                content: line,
            });
            self.cursor += line_height;
        }

        self.cursor += self.styles.paragraph_spacing;
    }

    /// Assemble one table group. This is where column-count consistency is
    /// enforced: a row that disagrees with the group's first row is surfaced
    /// as an explicit error, never patched.
    fn place_table(&mut self, rows: &[Vec<String>]) -> Result<(), ExportError> {
        let Some(first) = rows.first() else {
            return Ok(());
        };
        let columns = first.len();
        if columns == 0 {
            return Err(ExportError::EmptyTable);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(ExportError::MalformedTable {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
        }

        let size = self.styles.body_size;
        let line_height = size * 1.2;
        let column_width = self.content_width() / columns as f32;

        for (index, row) in rows.iter().enumerate() {
            let is_header = index == 0;
            let row_height = if is_header {
                line_height + 2.0 * self.styles.cell_padding + self.styles.header_bottom_padding
            } else {
                line_height + 2.0 * self.styles.cell_padding
            };
            self.ensure_room(row_height);

            let (background, text_color, font) = if is_header {
                (self.styles.header_background, self.styles.header_text, Font::Bold)
            } else {
                (self.styles.body_background, Color::BLACK, Font::Regular)
            };

            for (column, cell) in row.iter().enumerate() {
                let cell_x = self.styles.margin + column as f32 * column_width;
                self.current.items.push(PageItem::Rect {
                    x: cell_x,
                    y: self.cursor,
                    width: column_width,
                    height: row_height,
                    fill: background,
                });
                self.current.items.push(PageItem::Frame {
                    x: cell_x,
                    y: self.cursor,
                    width: column_width,
                    height: row_height,
                    line_width: self.styles.grid_width,
                    color: self.styles.grid_color,
                });

                if cell.is_empty() {
                    continue;
                }
                let text = strip_markers(cell);
                let text_width = measure_text(&text, size, font);
                let centered = cell_x + (column_width - text_width) / 2.0;
                let text_x = centered.max(cell_x + self.styles.cell_padding);
                self.current.items.push(PageItem::Text {
                    x: text_x,
                    y: self.cursor + self.styles.cell_padding,
                    size,
                    font,
                    color: text_color,
                    content: text,
                });
            }

            self.cursor += row_height;
        }

        self.cursor += self.styles.table_spacing;
        Ok(())
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Cells may carry inline `**bold**` markers of their own; the header row is
/// already bold and the markers never render, so they are dropped.
fn strip_markers(cell: &str) -> String {
    if cell.contains("**") {
        cell.replace("**", "")
    } else {
        cell.to_string()
    }
}

/// Greedy word wrap against an approximate Helvetica advance width.
fn wrap_text(text: &str, size: f32, font: Font, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure_text(&candidate, size, font) <= max_width || line.is_empty() {
            line = candidate;
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Approximate rendered width of a string in points.
///
/// Coarse per-character advance classes for Helvetica; exact AFM metrics
/// are not worth carrying for centering and wrapping at this fidelity.
pub(crate) fn measure_text(text: &str, size: f32, font: Font) -> f32 {
    let factor: f32 = text.chars().map(char_factor).sum();
    let bold_adjust = match font {
        Font::Bold => 1.05,
        Font::Regular => 1.0,
    };
    factor * size * bold_adjust
}

fn char_factor(c: char) -> f32 {
    match c {
        'i' | 'l' | 'j' | 'I' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.30,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '-' => 0.35,
        ' ' => 0.28,
        'm' | 'w' | 'M' | 'W' | '\u{2014}' => 0.85,
        'A'..='Z' | '0'..='9' => 0.66,
        _ => 0.50,
    }
}
