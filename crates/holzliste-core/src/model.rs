use serde::{Deserialize, Serialize};
use std::fmt;

/// Output column names, in export order. Index `i` is filled from token `i`.
pub const COLUMNS: [&str; 8] = [
    "Holz",
    "Bezeichnung",
    "Position",
    "Stueck",
    "Laenge",
    "Breite",
    "Dicke",
    "Bemerkung",
];

/// Ordering key of a tokenized row.
///
/// Variant order matters: the derived `Ord` places every `Dimensions` key
/// before `Maximal`, so rows whose key cannot be read sink to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Dimensions {
        thickness: i64,
        width: i64,
        length: i64,
    },
    Maximal,
}

impl SortKey {
    pub fn is_maximal(&self) -> bool {
        matches!(self, SortKey::Maximal)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Dimensions {
                thickness,
                width,
                length,
            } => write!(f, "({thickness}, {width}, {length})"),
            SortKey::Maximal => write!(f, "(max)"),
        }
    }
}

/// One row of the cutting list, as exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Holz")]
    pub wood_type: String,
    #[serde(rename = "Bezeichnung")]
    pub description: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Stueck")]
    pub quantity: String,
    #[serde(rename = "Laenge")]
    pub length: String,
    #[serde(rename = "Breite")]
    pub width: String,
    #[serde(rename = "Dicke")]
    pub thickness: String,
    #[serde(rename = "Bemerkung")]
    pub remark: String,
}

impl Record {
    /// Map tokens to fields by position. Missing positions become empty
    /// strings and tokens past the last column are ignored.
    pub fn from_tokens(tokens: &[String]) -> Record {
        let field = |i: usize| tokens.get(i).cloned().unwrap_or_default();
        Record {
            wood_type: field(0),
            description: field(1),
            position: field(2),
            quantity: field(3),
            length: field(4),
            width: field(5),
            thickness: field(6),
            remark: field(7),
        }
    }

    /// Field values in `COLUMNS` order.
    pub fn values(&self) -> [&str; 8] {
        [
            &self.wood_type,
            &self.description,
            &self.position,
            &self.quantity,
            &self.length,
            &self.width,
            &self.thickness,
            &self.remark,
        ]
    }
}

/// A page that contributed nothing to the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageWarning {
    pub page_number: usize,
    pub reason: String,
}

/// Result of converting a whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Records in sorted order.
    pub records: Vec<Record>,
    pub warnings: Vec<PageWarning>,
    /// Rows whose sort key could not be read and were moved to the end.
    pub malformed_rows: usize,
}
