//! lektio-export
//!
//! PDF generation from the markdown subset the model emits: pipe tables,
//! `**bold**` headings, `* ` bullets, and plain paragraphs.
//!
//! The pipeline is `classify` (one line → one tagged kind), `blocks`
//! (lines → ordered render units), `layout` (render units → positioned
//! page items), `pdf` (page items → PDF bytes via lopdf).

pub mod blocks;
pub mod classify;
pub mod error;
pub mod layout;
pub mod pdf;
pub mod styles;

pub use blocks::{Block, ParagraphStyle, build_blocks};
pub use error::ExportError;
pub use pdf::{generate_pdf, render_to_file, render_to_writer};
pub use styles::DocumentStyles;
