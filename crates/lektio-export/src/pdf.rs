//! In-memory PDF assembly using `lopdf`.
//!
//! The whole object graph is built and serialized to a buffer before any
//! byte reaches the destination, so a failed render never leaves a partial
//! artifact. Output is deterministic: no timestamps, no document IDs.
//!
//! Text uses the base-14 Type1 fonts Helvetica (`/F1`) and Helvetica-Bold
//! (`/F2`) with WinAnsi encoding, which keeps the artifact self-contained
//! without embedding font programs.

use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use tracing::{debug, info};

use crate::blocks::build_blocks;
use crate::error::ExportError;
use crate::layout::{Font, Page, PageItem, layout_document};
use crate::styles::{Color, DocumentStyles};

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Render source text into PDF bytes.
pub fn generate_pdf(text: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let blocks = build_blocks(text);
    let pages = layout_document(&blocks, styles)?;
    debug!(blocks = blocks.len(), pages = pages.len(), "document resolved");

    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();
    let resources_id = document.new_object_id();

    let regular_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });

    // Central resources dictionary shared by every page.
    let resources = dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    };
    document
        .objects
        .insert(resources_id, Object::Dictionary(resources));

    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
        }),
    );
    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    let mut page_ids = Vec::new();
    for page in &pages {
        let content = render_page_content(page);
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed = encoder.finish()?;
        let content_id =
            document.add_object(Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                DocumentStyles::PAGE_WIDTH.into(),
                DocumentStyles::PAGE_HEIGHT.into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        page_ids.push(document.add_object(page_dict));
    }

    if let Some(Object::Dictionary(pages_dict)) = document.objects.get_mut(&pages_id) {
        let kids: Vec<Object> = page_ids.iter().map(|id| Object::from(*id)).collect();
        pages_dict.set("Kids", kids);
        pages_dict.set("Count", page_ids.len() as i32);
    }

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Render source text and write the finished artifact to `writer`.
pub fn render_to_writer<W: Write>(
    text: &str,
    styles: &DocumentStyles,
    writer: &mut W,
) -> Result<(), ExportError> {
    let bytes = generate_pdf(text, styles)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Render source text and write the finished artifact to `path`. The
/// destination is only touched once the document has fully resolved.
pub fn render_to_file(
    text: &str,
    styles: &DocumentStyles,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let bytes = generate_pdf(text, styles)?;
    std::fs::write(path.as_ref(), &bytes)?;
    info!(
        path = %path.as_ref().display(),
        bytes = bytes.len(),
        "lesson plan PDF written"
    );
    Ok(())
}

fn render_page_content(page: &Page) -> Content {
    let mut ctx = PageContext::new();
    for item in &page.items {
        ctx.draw_item(item);
    }
    ctx.finish()
}

/// Content-stream builder with minimal graphics-state deduplication: font,
/// fill color, stroke color, and line width ops are only re-emitted when
/// they change.
struct PageContext {
    content: Content,
    font: Option<(&'static str, f32)>,
    fill: Option<Color>,
    stroke: Option<Color>,
    line_width: Option<f32>,
}

impl PageContext {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            font: None,
            fill: None,
            stroke: None,
            line_width: None,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn draw_item(&mut self, item: &PageItem) {
        match item {
            PageItem::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => {
                self.set_fill_color(*fill);
                let pdf_y = DocumentStyles::PAGE_HEIGHT - (y + height);
                self.push("re", vec![(*x).into(), pdf_y.into(), (*width).into(), (*height).into()]);
                self.push("f", vec![]);
            }
            PageItem::Frame {
                x,
                y,
                width,
                height,
                line_width,
                color,
            } => {
                self.set_line_width(*line_width);
                self.set_stroke_color(*color);
                let pdf_y = DocumentStyles::PAGE_HEIGHT - (y + height);
                self.push("re", vec![(*x).into(), pdf_y.into(), (*width).into(), (*height).into()]);
                self.push("S", vec![]);
            }
            PageItem::Text {
                x,
                y,
                size,
                font,
                color,
                content,
            } => {
                if content.trim().is_empty() {
                    return;
                }
                self.push("BT", vec![]);
                self.set_font(*font, *size);
                self.set_fill_color(*color);
                let baseline_y = y + size * 0.8;
                let pdf_y = DocumentStyles::PAGE_HEIGHT - baseline_y;
                self.push("Td", vec![(*x).into(), pdf_y.into()]);
                self.push(
                    "Tj",
                    vec![Object::String(to_win_ansi(content), StringFormat::Literal)],
                );
                self.push("ET", vec![]);
            }
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: Font, size: f32) {
        let name = match font {
            Font::Regular => REGULAR_FONT,
            Font::Bold => BOLD_FONT,
        };
        if self.font != Some((name, size)) {
            self.push(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), size.into()],
            );
            self.font = Some((name, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.fill != Some(color) {
            self.push("rg", rgb_operands(color));
            self.fill = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.stroke != Some(color) {
            self.push("RG", rgb_operands(color));
            self.stroke = Some(color);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        if self.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.line_width = Some(width);
        }
    }
}

fn rgb_operands(color: Color) -> Vec<Object> {
    vec![
        (color.r as f32 / 255.0).into(),
        (color.g as f32 / 255.0).into(),
        (color.b as f32 / 255.0).into(),
    ]
}

/// Map text to WinAnsi bytes. Characters outside Latin-1 fall back to `?`,
/// except the typographic set WinAnsi places in 0x80–0x9F.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95, // bullet
            '\u{2013}' => 0x96, // en dash
            '\u{2014}' => 0x97, // em dash
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85, // ellipsis
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
