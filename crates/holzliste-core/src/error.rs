use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HolzlisteError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("given file does not have a .pdf extension: {}", .0.display())]
    NotPdf(PathBuf),

    #[error("no text could be extracted from the PDF")]
    NoTextExtracted,

    #[error("no data rows left after removing header and separator lines")]
    NoRecords,

    #[error("unsupported output format for {} (expected .xlsx or .json)", .0.display())]
    UnsupportedOutput(PathBuf),

    #[error("failed to write {}: {reason}", path.display())]
    Export { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
