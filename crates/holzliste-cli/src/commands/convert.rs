use holzliste_core::error::HolzlisteError;
use holzliste_core::export::exporter_for_path;
use holzliste_core::extraction::pdftotext::PdftotextExtractor;
use holzliste_core::paths;
use std::path::PathBuf;

pub fn run(input_file: PathBuf, output_file: Option<PathBuf>) -> Result<(), HolzlisteError> {
    log::info!("Input file: {}", input_file.display());
    paths::validate_input(&input_file)?;

    let output_file = output_file.unwrap_or_else(|| paths::default_output_path(&input_file));
    log::info!("Output file: {}", output_file.display());

    // Unsupported output extensions fail before the PDF is read.
    let exporter = exporter_for_path(&output_file)?;

    let pdf_bytes = std::fs::read(&input_file)?;
    let extractor = PdftotextExtractor::new();
    let conversion = holzliste_core::convert_pdf(&pdf_bytes, &extractor)?;

    log::info!(
        "Writing {} records as {} to {}",
        conversion.records.len(),
        exporter.format_name(),
        output_file.display()
    );
    exporter.write_table(&conversion.records, &output_file)?;

    if conversion.malformed_rows > 0 {
        log::warn!(
            "{} row(s) without readable dimensions placed at the end",
            conversion.malformed_rows
        );
    }
    for w in &conversion.warnings {
        log::warn!("page {} skipped: {}", w.page_number, w.reason);
    }

    Ok(())
}
