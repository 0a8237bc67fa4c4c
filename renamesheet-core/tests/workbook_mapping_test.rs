use renamesheet_core::{
    load_mapping, parse_mapping_workbook, rename_operation, Category, MappingRecord, Outcome,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// Sheet1: header `Old File Name | New File Name | Notes`, then
// `A.PDF | 2024 (numeric) | x`, an empty row 3, and `C.PDF | D`.
fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mapping.xlsx")
}

#[test]
fn test_workbook_fixture_decodes_first_sheet() {
    let table = load_mapping(&fixture()).unwrap();

    assert_eq!(
        table.records,
        vec![
            MappingRecord::new(2, "A.PDF", "2024"),
            MappingRecord::new(4, "C.PDF", "D"),
        ]
    );
}

#[test]
fn test_workbook_bytes_decode_without_extension_hint() {
    let bytes = fs::read(fixture()).unwrap();
    let table = parse_mapping_workbook(&bytes).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.find_by_old_name("A.PDF").unwrap().new_name, "2024");
}

#[test]
fn test_rename_with_workbook_mapping() {
    let folder = TempDir::new().unwrap();
    fs::write(folder.path().join("A.PDF"), b"a").unwrap();
    fs::write(folder.path().join("C.PDF"), b"c").unwrap();

    let result = rename_operation(Some(folder.path()), Some(&fixture()), Category::Pdf).unwrap();

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].row, 2);
    assert_eq!(result.rows[0].new_name.as_deref(), Some("2024.PDF"));
    assert_eq!(result.rows[0].outcome, Outcome::Renamed);
    assert_eq!(result.rows[1].row, 4);
    assert_eq!(result.rows[1].outcome, Outcome::Renamed);

    let mut names: Vec<String> = fs::read_dir(folder.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["2024.PDF", "D.PDF"]);
    assert_eq!(fs::read(folder.path().join("2024.PDF")).unwrap(), b"a");
}
