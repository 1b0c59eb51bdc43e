pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod paths;

use error::HolzlisteError;
use extraction::{PageContent, PdfExtractor};
use model::{Conversion, PageWarning, Record};

/// Main API entry point: convert a cutting list PDF into sorted records.
pub fn convert_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Conversion, HolzlisteError> {
    log::info!("Reading PDF with {}", extractor.backend_name());
    let pages = extractor.extract_pages(pdf_bytes)?;
    convert_pages(&pages)
}

/// Convert extracted pages into records sorted by thickness, width and length.
///
/// Pages without text are skipped with a warning. Rows from all pages are
/// sorted together, not page by page.
pub fn convert_pages(pages: &[PageContent]) -> Result<Conversion, HolzlisteError> {
    let mut warnings = Vec::new();
    let mut text_pages: Vec<&PageContent> = Vec::with_capacity(pages.len());
    for page in pages {
        if page.is_blank() {
            log::warn!("No text extracted from page {}", page.page_number);
            warnings.push(PageWarning {
                page_number: page.page_number,
                reason: "no text extracted".into(),
            });
        } else {
            text_pages.push(page);
        }
    }

    if text_pages.is_empty() {
        return Err(HolzlisteError::NoTextExtracted);
    }

    log::info!("Splitting data into datasets...");
    let rows: Vec<Vec<String>> = text_pages
        .iter()
        .flat_map(|page| parsing::page_rows(page))
        .collect();

    if rows.is_empty() {
        return Err(HolzlisteError::NoRecords);
    }

    log::info!("Sorting {} datasets...", rows.len());
    let sorted = parsing::sort_rows(rows);

    let mut malformed_rows = 0;
    for row in &sorted {
        let key = parsing::sort_key(row);
        if key.is_maximal() {
            malformed_rows += 1;
            log::debug!("No sort key for {:?}, moved to the end", row);
        } else {
            log::debug!("{key} {:?}", row);
        }
    }

    log::info!("Converting datasets to records...");
    let records: Vec<Record> = sorted.iter().map(|row| Record::from_tokens(row)).collect();

    Ok(Conversion {
        records,
        warnings,
        malformed_rows,
    })
}
