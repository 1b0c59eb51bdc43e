use std::path::{Path, PathBuf};

use crate::error::HolzlisteError;

/// Reject inputs whose file name does not end in `.pdf` (any case).
pub fn validate_input(path: &Path) -> Result<(), HolzlisteError> {
    let is_pdf = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);

    if is_pdf {
        Ok(())
    } else {
        Err(HolzlisteError::NotPdf(path.to_path_buf()))
    }
}

/// Output path used when none is given: next to the input, upload
/// timestamp prefix removed, `.pdf` replaced by `.xlsx`.
///
/// `uploads/1755773046270_Holzbestellliste.pdf` becomes
/// `uploads/Holzbestellliste.xlsx`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let base = strip_timestamp_prefix(&file_name);
    let stem = strip_pdf_extension(base);
    let output_name = format!("{stem}.xlsx");

    match input.parent() {
        Some(dir) => dir.join(output_name),
        None => PathBuf::from(output_name),
    }
}

/// Uploaded files are stored as `<millis>_<original name>`.
fn strip_timestamp_prefix(name: &str) -> &str {
    match name.split_once('_') {
        Some((prefix, rest))
            if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            rest
        }
        _ => name,
    }
}

fn strip_pdf_extension(name: &str) -> &str {
    let cut = name.len().saturating_sub(4);
    match name.get(cut..) {
        Some(ext) if ext.eq_ignore_ascii_case(".pdf") => &name[..cut],
        _ => name,
    }
}
