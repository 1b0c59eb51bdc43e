pub mod json;
pub mod xlsx;

use crate::error::HolzlisteError;
use crate::model::Record;
use std::path::Path;

pub use json::JsonExporter;
pub use xlsx::XlsxExporter;

/// Trait for writing records as a table with the `COLUMNS` header.
pub trait TableExporter {
    /// Write all records, in order, to `path`. Failures are not retried.
    fn write_table(&self, records: &[Record], path: &Path) -> Result<(), HolzlisteError>;

    /// Name of the output format (for diagnostics).
    fn format_name(&self) -> &str;
}

/// Pick an exporter from the output file extension.
pub fn exporter_for_path(path: &Path) -> Result<Box<dyn TableExporter>, HolzlisteError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("xlsx") => Ok(Box::new(XlsxExporter::new())),
        Some("json") => Ok(Box::new(JsonExporter)),
        _ => Err(HolzlisteError::UnsupportedOutput(path.to_path_buf())),
    }
}
