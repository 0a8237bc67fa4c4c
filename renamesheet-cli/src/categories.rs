use anyhow::Result;
use renamesheet_core::{categories_operation, OutputFormat, OutputFormatter};

pub fn handle_categories(output: OutputFormat, use_color: bool) -> Result<()> {
    let result = categories_operation();
    print!("{}", result.format(output, use_color));
    Ok(())
}
