use anyhow::Result;
use renamesheet_core::{template_operation, Category, OutputFormat, OutputFormatter, TemplateFormat};
use std::path::Path;

pub fn handle_template(
    category: Category,
    format: TemplateFormat,
    out_dir: &Path,
    output: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let result = template_operation(category, format, out_dir)?;
    print!("{}", result.format(output, use_color));
    Ok(())
}
