use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const GREY: Color = Color {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITESMOKE: Color = Color {
        r: 245,
        g: 245,
        b: 245,
    };
    pub const BEIGE: Color = Color {
        r: 245,
        g: 245,
        b: 220,
    };
}

/// Document styling configuration for PDF exports.
///
/// All lengths are in PDF points (1/72 inch). The page is fixed at US
/// Letter, matching the original tool's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Body text size in points.
    pub body_size: f32,

    /// Uniform page margin in points.
    pub margin: f32,

    /// Vertical gap after a paragraph block.
    pub paragraph_spacing: f32,

    /// Vertical gap after a table block.
    pub table_spacing: f32,

    /// Extra left indent for bullet items.
    pub bullet_indent: f32,

    /// Padding inside table cells.
    pub cell_padding: f32,

    /// Extra padding under the header row.
    pub header_bottom_padding: f32,

    /// Header row background.
    pub header_background: Color,

    /// Header row text color.
    pub header_text: Color,

    /// Body row background.
    pub body_background: Color,

    /// Grid line color.
    pub grid_color: Color,

    /// Grid line width in points.
    pub grid_width: f32,
}

impl DocumentStyles {
    /// Page width in points (US Letter).
    pub const PAGE_WIDTH: f32 = 612.0;

    /// Page height in points (US Letter).
    pub const PAGE_HEIGHT: f32 = 792.0;
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_size: 12.0,
            margin: 72.0,
            paragraph_spacing: 6.0,
            table_spacing: 12.0,
            bullet_indent: 20.0,
            cell_padding: 4.0,
            header_bottom_padding: 12.0,
            header_background: Color::GREY,
            header_text: Color::WHITESMOKE,
            body_background: Color::BEIGE,
            grid_color: Color::BLACK,
            grid_width: 1.0,
        }
    }
}
