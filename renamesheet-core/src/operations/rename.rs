use crate::error::RunError;
use crate::mapping::load_mapping;
use crate::output::RenameResult;
use crate::rename::rename_in_folder;
use crate::report::Tally;
use crate::Category;
use anyhow::Result;
use std::path::Path;

/// Rename operation - renames files in place inside `folder`
///
/// Both inputs must be present and the mapping must load completely before
/// any file is touched. After that every row is attempted independently.
pub fn rename_operation(
    folder: Option<&Path>,
    mapping: Option<&Path>,
    category: Category,
) -> Result<RenameResult> {
    let (Some(folder), Some(mapping)) = (non_empty(folder), non_empty(mapping)) else {
        return Err(RunError::MissingFolderOrMapping.into());
    };

    let table = load_mapping(mapping)?;
    log::info!(
        "Renaming {} mapped file(s) in {} as {}",
        table.len(),
        folder.display(),
        category
    );

    let rows = rename_in_folder(folder, &table, category);
    let tally = Tally::from_rows(&rows);
    log::info!(
        "Rename finished: {} renamed, {} warnings, {} errors",
        tally.succeeded,
        tally.warnings,
        tally.errors
    );

    Ok(RenameResult {
        category,
        folder: folder.to_path_buf(),
        rows,
        tally,
    })
}

pub(crate) fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
