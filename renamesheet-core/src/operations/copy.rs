use super::rename::non_empty;
use crate::copy::{copy_upload, Upload};
use crate::error::RunError;
use crate::mapping::load_mapping;
use crate::output::CopyResult;
use crate::report::{Outcome, RowReport, Tally};
use crate::Category;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy operation - writes renamed copies of `uploads` into `out_dir`
///
/// Each upload is read fully, matched, written and released before the next
/// one is read. An unreadable upload is reported on its own row.
pub fn copy_operation(
    uploads: &[PathBuf],
    mapping: Option<&Path>,
    category: Category,
    out_dir: &Path,
) -> Result<CopyResult> {
    let Some(mapping) = non_empty(mapping) else {
        return Err(RunError::MissingUploadsOrMapping.into());
    };
    if uploads.is_empty() {
        return Err(RunError::MissingUploadsOrMapping.into());
    }

    let table = load_mapping(mapping)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    log::info!(
        "Copying {} uploaded file(s) into {} as {}",
        uploads.len(),
        out_dir.display(),
        category
    );

    let rows: Vec<RowReport> = uploads
        .iter()
        .enumerate()
        .map(|(idx, path)| match Upload::from_path(path) {
            Ok(upload) => copy_upload(&upload, &table, category, out_dir, idx + 1),
            Err(e) => {
                log::warn!("Skipping unreadable upload {}: {:#}", path.display(), e);
                RowReport {
                    row: idx + 1,
                    old_name: upload_label(path),
                    new_name: None,
                    outcome: Outcome::Error(format!("{e:#}")),
                }
            },
        })
        .collect();

    let tally = Tally::from_rows(&rows);
    Ok(CopyResult {
        category,
        out_dir: out_dir.to_path_buf(),
        rows,
        tally,
    })
}

fn upload_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
