use crate::output::TemplateResult;
use crate::template::{build_template, write_template, TemplateFormat};
use crate::Category;
use anyhow::Result;
use std::path::Path;

/// Template operation - writes the example table for `category` into `out_dir`
pub fn template_operation(
    category: Category,
    format: TemplateFormat,
    out_dir: &Path,
) -> Result<TemplateResult> {
    let path = write_template(category, format, out_dir)?;
    Ok(TemplateResult {
        category,
        format,
        path,
        example: build_template(category),
    })
}
