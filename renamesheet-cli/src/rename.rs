use anyhow::Result;
use renamesheet_core::{rename_operation, Category, OutputFormat, OutputFormatter};
use std::path::PathBuf;

pub fn handle_rename(
    folder: Option<PathBuf>,
    mapping: Option<PathBuf>,
    category: Category,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let result = rename_operation(folder.as_deref(), mapping.as_deref(), category)?;

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
