use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("table row {row} has {found} columns, expected {expected}")]
    MalformedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("table group has zero columns")]
    EmptyTable,

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}
