use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

use crate::error::HolzlisteError;
use crate::export::TableExporter;
use crate::model::{Record, COLUMNS};

const SHEET_NAME: &str = "Sheet1";

/// Writes records to a single-sheet Excel workbook.
///
/// Row 1 holds the bold column header; every record is one row below it.
/// All values are written as text and empty values stay blank cells.
pub struct XlsxExporter {
    header_format: Format,
}

impl XlsxExporter {
    pub fn new() -> Self {
        XlsxExporter {
            header_format: Format::new().set_bold(),
        }
    }

    fn build_workbook(&self, records: &[Record]) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, name) in (0u16..).zip(COLUMNS) {
            sheet.write_string_with_format(0, col, name, &self.header_format)?;
        }

        for (row, record) in (1u32..).zip(records) {
            for (col, value) in (0u16..).zip(record.values()) {
                if !value.is_empty() {
                    sheet.write_string(row, col, value)?;
                }
            }
        }

        Ok(workbook)
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExporter for XlsxExporter {
    fn write_table(&self, records: &[Record], path: &Path) -> Result<(), HolzlisteError> {
        let export_err = |e: XlsxError| HolzlisteError::Export {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let mut workbook = self.build_workbook(records).map_err(export_err)?;
        workbook.save(path).map_err(export_err)
    }

    fn format_name(&self) -> &str {
        "xlsx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn cell_text(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Empty => String::new(),
            other => format!("{other}"),
        }
    }

    fn read_back(path: &Path) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect()
    }

    fn record(s: &str) -> Record {
        let tokens: Vec<String> = s.split_whitespace().map(String::from).collect();
        Record::from_tokens(&tokens)
    }

    #[test]
    fn test_header_and_rows_written_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liste.xlsx");
        let records = vec![
            record("B Desc2 3 1 100 50 18"),
            record("A Desc 1 2 300 150 18 extra"),
        ];

        XlsxExporter::new().write_table(&records, &path).unwrap();

        let rows = read_back(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], COLUMNS.map(String::from).to_vec());
        assert_eq!(rows[1][0], "B");
        assert_eq!(rows[1][6], "18");
        assert_eq!(rows[2][0], "A");
        assert_eq!(rows[2][7], "extra");
    }

    #[test]
    fn test_missing_values_are_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liste.xlsx");
        let records = vec![record("A Desc 1 2 300 150 18 x"), record("C Kurz 1")];

        XlsxExporter::new().write_table(&records, &path).unwrap();

        let rows = read_back(&path);
        assert_eq!(rows[2][0], "C");
        assert_eq!(rows[2][2], "1");
        for col in 3..8 {
            assert_eq!(rows[2][col], "", "column {col}");
        }
    }

    #[test]
    fn test_numeric_looking_values_stay_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liste.xlsx");

        XlsxExporter::new()
            .write_table(&[record("A D 007 2 300 150 18")], &path)
            .unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.get_value((1, 2)), Some(&Data::String("007".into())));
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("liste.xlsx");
        let err = XlsxExporter::new().write_table(&[], &path).unwrap_err();
        assert!(matches!(err, HolzlisteError::Export { .. }));
    }
}
