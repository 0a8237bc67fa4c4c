//! Loading of the user-supplied mapping table.
//!
//! A mapping table is any CSV or spreadsheet whose header row contains the two
//! columns [`OLD_COLUMN`] and [`NEW_COLUMN`]. Extra columns are ignored and row
//! order is preserved. The table is accepted whole or not at all.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

pub const OLD_COLUMN: &str = "Old File Name";
pub const NEW_COLUMN: &str = "New File Name";

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to process the mapping file: {0}")]
    Decode(String),

    #[error(
        "invalid template format: missing column(s) {}; ensure it contains '{}' and '{}' columns",
        .0.join(", "),
        OLD_COLUMN,
        NEW_COLUMN
    )]
    MissingColumns(Vec<String>),
}

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Sheet row (or CSV line) the entry came from; the header is row 1.
    pub row: usize,
    pub old_name: String,
    pub new_name: String,
}

impl MappingRecord {
    pub fn new(row: usize, old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            row,
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    pub records: Vec<MappingRecord>,
}

impl MappingTable {
    pub fn new(records: Vec<MappingRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingRecord> {
        self.records.iter()
    }

    /// First record whose old name equals `name` exactly.
    pub fn find_by_old_name(&self, name: &str) -> Option<&MappingRecord> {
        self.records.iter().find(|r| r.old_name == name)
    }
}

/// Load a mapping table from disk, choosing the decoder from the file extension.
pub fn load_mapping(path: &Path) -> Result<MappingTable, MappingError> {
    let bytes = fs::read(path)
        .map_err(|e| MappingError::Decode(format!("{}: {}", path.display(), e)))?;

    if is_workbook(path) {
        parse_mapping_workbook(&bytes)
    } else {
        parse_mapping_csv(&bytes)
    }
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Decode a CSV byte stream whose first record is the header.
pub fn parse_mapping_csv(bytes: &[u8]) -> Result<MappingTable, MappingError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header: Vec<String> = reader
        .headers()
        .map_err(|e| MappingError::Decode(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    let (old_idx, new_idx) = locate_columns(&header)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| MappingError::Decode(e.to_string()))?;
        let line = row
            .position()
            .and_then(|pos| usize::try_from(pos.line()).ok())
            .unwrap_or_default();
        let old_name = row.get(old_idx).unwrap_or_default();
        let new_name = row.get(new_idx).unwrap_or_default();
        push_record(&mut records, line, old_name, new_name);
    }

    log::debug!("Parsed {} mapping rows from CSV", records.len());
    Ok(MappingTable::new(records))
}

/// Decode a spreadsheet byte stream; the first worksheet is used and its first
/// row is the header.
pub fn parse_mapping_workbook(bytes: &[u8]) -> Result<MappingTable, MappingError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| MappingError::Decode(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MappingError::Decode("workbook contains no worksheets".to_string()))?
        .map_err(|e| MappingError::Decode(e.to_string()))?;

    // Sheet row of the header; the range may not start at A1.
    let header_row = range.start().map_or(1, |(row, _)| row as usize + 1);

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let (old_idx, new_idx) = locate_columns(&header)?;

    let mut records = Vec::new();
    for (offset, cells) in rows.enumerate() {
        let old_name = cells.get(old_idx).map(cell_text).unwrap_or_default();
        let new_name = cells.get(new_idx).map(cell_text).unwrap_or_default();
        push_record(&mut records, header_row + 1 + offset, &old_name, &new_name);
    }

    log::debug!("Parsed {} mapping rows from workbook", records.len());
    Ok(MappingTable::new(records))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn locate_columns(header: &[String]) -> Result<(usize, usize), MappingError> {
    let position = |name: &str| {
        header
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == name)
    };

    match (position(OLD_COLUMN), position(NEW_COLUMN)) {
        (Some(old_idx), Some(new_idx)) => Ok((old_idx, new_idx)),
        (old, new) => {
            let mut missing = Vec::new();
            if old.is_none() {
                missing.push(OLD_COLUMN.to_string());
            }
            if new.is_none() {
                missing.push(NEW_COLUMN.to_string());
            }
            Err(MappingError::MissingColumns(missing))
        },
    }
}

// Blank spreadsheet lines carry no instruction.
fn push_record(records: &mut Vec<MappingRecord>, row: usize, old_name: &str, new_name: &str) {
    if old_name.is_empty() && new_name.is_empty() {
        return;
    }
    records.push(MappingRecord::new(row, old_name, new_name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_csv_preserves_order() {
        let csv = "Old File Name,New File Name\nb.PDF,two\na.PDF,one\n";
        let table = parse_mapping_csv(csv.as_bytes()).unwrap();

        assert_eq!(
            table.records,
            vec![
                MappingRecord::new(2, "b.PDF", "two"),
                MappingRecord::new(3, "a.PDF", "one"),
            ]
        );
    }

    #[test]
    fn test_parse_csv_ignores_extra_columns() {
        let csv = "Notes,New File Name,Owner,Old File Name\nx,new1,me,old1\n";
        let table = parse_mapping_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records, vec![MappingRecord::new(2, "old1", "new1")]);
    }

    #[test]
    fn test_parse_csv_missing_new_column() {
        let csv = "Old File Name,Renamed\na,b\n";
        let err = parse_mapping_csv(csv.as_bytes()).unwrap_err();
        match err {
            MappingError::MissingColumns(missing) => {
                assert_eq!(missing, vec![NEW_COLUMN.to_string()]);
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_csv_missing_both_columns() {
        let err = parse_mapping_csv(b"a,b\n1,2\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid template format"));
        assert!(message.contains(OLD_COLUMN));
        assert!(message.contains(NEW_COLUMN));
    }

    #[test]
    fn test_parse_csv_empty_input_is_schema_invalid() {
        let err = parse_mapping_csv(b"").unwrap_err();
        assert!(matches!(err, MappingError::MissingColumns(_)));
    }

    #[test]
    fn test_parse_csv_strips_bom() {
        let csv = "\u{feff}Old File Name,New File Name\na,b\n";
        let table = parse_mapping_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_csv_skips_blank_rows_and_short_rows() {
        let csv = "Old File Name,New File Name\n,\na\n";
        let table = parse_mapping_csv(csv.as_bytes()).unwrap();
        assert_eq!(table.records, vec![MappingRecord::new(3, "a", "")]);
    }

    #[test]
    fn test_parse_csv_rows_keep_source_line_numbers() {
        let csv = "Old File Name,New File Name\na,b\n\n,\nc,d\n";
        let table = parse_mapping_csv(csv.as_bytes()).unwrap();
        let rows: Vec<usize> = table.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![2, 5]);
    }

    #[test]
    fn test_parse_csv_invalid_utf8_is_decode_error() {
        let bytes = b"Old File Name,New File Name\n\xff\xfe,b\n";
        let err = parse_mapping_csv(bytes).unwrap_err();
        assert!(matches!(err, MappingError::Decode(_)));
    }

    #[test]
    fn test_parse_workbook_rejects_garbage() {
        let err = parse_mapping_workbook(b"definitely not a spreadsheet").unwrap_err();
        assert!(matches!(err, MappingError::Decode(_)));
        assert!(err.to_string().starts_with("failed to process the mapping file"));
    }

    #[test]
    fn test_load_mapping_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_mapping(&temp_dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, MappingError::Decode(_)));
    }

    #[test]
    fn test_load_mapping_dispatches_on_extension() {
        let temp_dir = TempDir::new().unwrap();
        let csv_path = temp_dir.path().join("map.csv");
        std::fs::write(&csv_path, "Old File Name,New File Name\na,b\n").unwrap();
        assert_eq!(load_mapping(&csv_path).unwrap().len(), 1);

        // CSV text behind a workbook extension goes to the workbook decoder
        let xlsx_path = temp_dir.path().join("map.xlsx");
        std::fs::write(&xlsx_path, "Old File Name,New File Name\na,b\n").unwrap();
        assert!(matches!(
            load_mapping(&xlsx_path).unwrap_err(),
            MappingError::Decode(_)
        ));
    }

    #[test]
    fn test_find_by_old_name_first_match_wins() {
        let table = MappingTable::new(vec![
            MappingRecord::new(2, "a", "first"),
            MappingRecord::new(3, "a", "second"),
        ]);
        assert_eq!(table.find_by_old_name("a").unwrap().new_name, "first");
        assert!(table.find_by_old_name("A").is_none());
    }
}
