use crate::error::HolzlisteError;
use crate::export::TableExporter;
use crate::model::Record;
use std::path::Path;

/// Writes records as a pretty-printed JSON array keyed by column name.
pub struct JsonExporter;

impl TableExporter for JsonExporter {
    fn write_table(&self, records: &[Record], path: &Path) -> Result<(), HolzlisteError> {
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(path, json).map_err(|e| HolzlisteError::Export {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn format_name(&self) -> &str {
        "json"
    }
}
