//! Structured error types for sheetspan.

/// All errors that can occur while loading worksheets or building merge models.
#[derive(Debug, thiserror::Error)]
pub enum SheetSpanError {
    /// Invalid cell reference.
    #[error("Invalid cell reference: {0}")]
    CellRef(String),

    /// Invalid merge range (end before start, or unparseable).
    #[error("Invalid merge range: {0}")]
    Range(String),

    /// Spreadsheet reader error from calamine.
    #[error("Spreadsheet read: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetSpanError>;
