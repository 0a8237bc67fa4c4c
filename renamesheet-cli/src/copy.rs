use anyhow::Result;
use renamesheet_core::{copy_operation, Category, OutputFormat, OutputFormatter};
use std::path::{Path, PathBuf};

pub fn handle_copy(
    files: &[PathBuf],
    mapping: Option<PathBuf>,
    category: Category,
    out_dir: &Path,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let result = copy_operation(files, mapping.as_deref(), category, out_dir)?;

    // Handle output based on format
    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format_summary(use_color));
            }
        },
    }

    Ok(())
}
