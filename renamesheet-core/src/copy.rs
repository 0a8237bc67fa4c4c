//! Renamed copies of uploaded files (copy mode).
//!
//! Uploaded files are byte streams with an original name. They are matched
//! against the mapping by exact name and written to an output directory under
//! their new name; the source is never modified.

use crate::category::Category;
use crate::mapping::MappingTable;
use crate::naming::{apply_extension, is_plain_file_name};
use crate::report::{Outcome, RowReport};
use crate::staging::write_staged;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// An uploaded file: its original name and its full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file fully; the upload is named after the path's final component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("{} has no usable file name", path.display()))?
            .to_string();
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self { name, bytes })
    }
}

/// Produce a renamed copy in `out_dir` for every upload that has a mapping row.
///
/// Uploads are processed in the order given; the first row whose old name
/// equals the upload's name wins.
pub fn copy_uploads(
    uploads: &[Upload],
    table: &MappingTable,
    category: Category,
    out_dir: &Path,
) -> Vec<RowReport> {
    uploads
        .iter()
        .enumerate()
        .map(|(idx, upload)| copy_upload(upload, table, category, out_dir, idx + 1))
        .collect()
}

/// Match a single upload against `table` and write its renamed copy.
///
/// `row` is the 1-based position reported back.
pub fn copy_upload(
    upload: &Upload,
    table: &MappingTable,
    category: Category,
    out_dir: &Path,
    row: usize,
) -> RowReport {
    let Some(record) = table.find_by_old_name(&upload.name) else {
        log::warn!("No mapping row for uploaded file {}", upload.name);
        return RowReport {
            row,
            old_name: upload.name.clone(),
            new_name: None,
            outcome: Outcome::Unmatched,
        };
    };

    let new_name = apply_extension(&record.new_name, category);
    let outcome = if record.new_name.is_empty() {
        Outcome::Error("new file name is empty".to_string())
    } else if !is_plain_file_name(&new_name) {
        Outcome::Error(format!("'{new_name}' is not a plain file name"))
    } else {
        match write_staged(out_dir, &new_name, &upload.bytes, false) {
            Ok(path) => {
                log::debug!("Wrote renamed copy {}", path.display());
                Outcome::Copied
            },
            Err(e) => {
                log::warn!("Failed to write copy of {} as {}: {}", upload.name, new_name, e);
                Outcome::Error(e.to_string())
            },
        }
    };

    RowReport {
        row,
        old_name: upload.name.clone(),
        new_name: Some(new_name),
        outcome,
    }
}
