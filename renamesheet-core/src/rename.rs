//! In-place renaming of files inside a folder (path mode).

use crate::category::Category;
use crate::mapping::{MappingRecord, MappingTable};
use crate::naming::apply_extension;
use crate::report::{Outcome, RowReport};
use std::fs;
use std::io;
use std::path::Path;

/// Rename every mapped file inside `folder`, one row at a time, in table order.
///
/// A failing row never stops the rows after it. Each report carries the
/// mapping row its record came from.
pub fn rename_in_folder(folder: &Path, table: &MappingTable, category: Category) -> Vec<RowReport> {
    table
        .iter()
        .map(|record| rename_one(folder, record, category))
        .collect()
}

fn rename_one(folder: &Path, record: &MappingRecord, category: Category) -> RowReport {
    let row = record.row;
    let old_name = record.old_name.clone();

    if record.old_name.is_empty() {
        return RowReport {
            row,
            old_name,
            new_name: None,
            outcome: Outcome::Error("old file name is empty".to_string()),
        };
    }
    if record.new_name.is_empty() {
        return RowReport {
            row,
            old_name,
            new_name: None,
            outcome: Outcome::Error("new file name is empty".to_string()),
        };
    }

    let new_name = apply_extension(&record.new_name, category);
    let from = folder.join(&record.old_name);
    let to = folder.join(&new_name);

    let outcome = match fs::rename(&from, &to) {
        Ok(()) => {
            log::debug!("Renamed {} -> {}", from.display(), to.display());
            Outcome::Renamed
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound && fs::symlink_metadata(&from).is_err() => {
            log::warn!("Source not found: {}", from.display());
            Outcome::NotFound
        },
        Err(e) => {
            log::warn!(
                "Failed to rename {} -> {}: {}",
                from.display(),
                to.display(),
                e
            );
            Outcome::Error(e.to_string())
        },
    };

    RowReport {
        row,
        old_name,
        new_name: Some(new_name),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingRecord;
    use tempfile::TempDir;

    fn table(rows: &[(&str, &str)]) -> MappingTable {
        MappingTable::new(
            rows.iter()
                .enumerate()
                .map(|(idx, (old, new))| MappingRecord::new(idx + 2, *old, *new))
                .collect(),
        )
    }

    #[test]
    fn test_rename_appends_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.PDF"), b"pdf").unwrap();

        let rows = rename_in_folder(temp_dir.path(), &table(&[("A.PDF", "B")]), Category::Pdf);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].outcome, Outcome::Renamed);
        assert_eq!(rows[0].new_name.as_deref(), Some("B.PDF"));
        assert!(!temp_dir.path().join("A.PDF").exists());
        assert_eq!(fs::read(temp_dir.path().join("B.PDF")).unwrap(), b"pdf");
    }

    #[test]
    fn test_missing_source_is_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let rows = rename_in_folder(temp_dir.path(), &table(&[("ghost.PDF", "B")]), Category::Pdf);

        assert_eq!(rows[0].outcome, Outcome::NotFound);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_destination_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A"), b"x").unwrap();

        let rows = rename_in_folder(temp_dir.path(), &table(&[("A", "nope/B")]), Category::All);

        assert!(matches!(rows[0].outcome, Outcome::Error(_)));
        assert!(temp_dir.path().join("A").exists());
    }

    #[test]
    fn test_empty_names_are_row_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A"), b"x").unwrap();

        let rows = rename_in_folder(
            temp_dir.path(),
            &table(&[("", "B"), ("A", "")]),
            Category::All,
        );

        assert_eq!(
            rows[0].outcome,
            Outcome::Error("old file name is empty".to_string())
        );
        assert_eq!(
            rows[1].outcome,
            Outcome::Error("new file name is empty".to_string())
        );
        assert!(temp_dir.path().join("A").exists());
    }

    #[test]
    fn test_failures_do_not_stop_later_rows() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("c.png"), b"c").unwrap();

        let rows = rename_in_folder(
            temp_dir.path(),
            &table(&[("missing.png", "x"), ("c.png", "d")]),
            Category::Png,
        );

        assert_eq!(rows[0].row, 2);
        assert_eq!(rows[0].outcome, Outcome::NotFound);
        assert_eq!(rows[1].row, 3);
        assert_eq!(rows[1].outcome, Outcome::Renamed);
        assert!(temp_dir.path().join("d.PNG").exists());
    }

    #[test]
    fn test_second_pass_reports_not_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.PDF"), b"x").unwrap();
        let mapping = table(&[("A.PDF", "B")]);

        let first = rename_in_folder(temp_dir.path(), &mapping, Category::Pdf);
        let second = rename_in_folder(temp_dir.path(), &mapping, Category::Pdf);

        assert_eq!(first[0].outcome, Outcome::Renamed);
        assert_eq!(second[0].outcome, Outcome::NotFound);
        assert!(temp_dir.path().join("B.PDF").exists());
    }
}
