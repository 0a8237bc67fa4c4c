use crate::category::Category;
use crate::mapping::{NEW_COLUMN, OLD_COLUMN};
use crate::staging::write_staged;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const EXAMPLE_OLD_STEM: &str = "Example_Old_File";
const EXAMPLE_NEW_STEM: &str = "Example_New_File";

/// File format of a downloadable template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    #[default]
    Csv,
    Xlsx,
}

impl TemplateFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    pub fn file_name(self, category: Category) -> String {
        format!("{}.{}", category.template_stem(), self.extension())
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The single example row offered in a downloadable template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRow {
    #[serde(rename = "Old File Name")]
    pub old_file_name: String,
    #[serde(rename = "New File Name")]
    pub new_file_name: String,
}

/// Build the example row for `category`.
pub fn build_template(category: Category) -> TemplateRow {
    let extension = category.extension().unwrap_or_default();
    TemplateRow {
        old_file_name: format!("{EXAMPLE_OLD_STEM}{extension}"),
        new_file_name: format!("{EXAMPLE_NEW_STEM}{extension}"),
    }
}

/// Serialize the template for `category` in `format`.
pub fn render_template(category: Category, format: TemplateFormat) -> Result<Vec<u8>> {
    let row = build_template(category);
    match format {
        TemplateFormat::Csv => render_csv(&row),
        TemplateFormat::Xlsx => render_xlsx(&row),
    }
}

fn render_csv(row: &TemplateRow) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([OLD_COLUMN, NEW_COLUMN])
        .context("Failed to write template header")?;
    writer
        .write_record([row.old_file_name.as_str(), row.new_file_name.as_str()])
        .context("Failed to write template row")?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush template: {}", e.error()))
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Mapping" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

// Minimal single-sheet workbook; strings are stored inline so no shared
// string table is needed.
fn render_xlsx(row: &TemplateRow) -> Result<Vec<u8>> {
    let sheet = sheet_xml(&[
        [OLD_COLUMN, NEW_COLUMN],
        [row.old_file_name.as_str(), row.new_file_name.as_str()],
    ]);
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", ROOT_RELS_XML),
        ("xl/workbook.xml", WORKBOOK_XML),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
    ];

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        archive
            .start_file(name, options)
            .with_context(|| format!("Failed to add {name} to template workbook"))?;
        archive
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to add {name} to template workbook"))?;
    }
    let cursor = archive
        .finish()
        .context("Failed to finish template workbook")?;
    Ok(cursor.into_inner())
}

fn sheet_xml(rows: &[[&str; 2]]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (idx, cells) in rows.iter().enumerate() {
        let row_number = idx + 1;
        xml.push_str(&format!(r#"<row r="{row_number}">"#));
        for (column, value) in ["A", "B"].iter().zip(cells) {
            xml.push_str(&format!(
                r#"<c r="{column}{row_number}" t="inlineStr"><is><t>{}</t></is></c>"#,
                escape_xml(value)
            ));
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Write the template for `category` into `dir`, replacing any previous copy.
pub fn write_template(category: Category, format: TemplateFormat, dir: &Path) -> Result<PathBuf> {
    let bytes = render_template(category, format)?;
    let file_name = format.file_name(category);
    let path = write_staged(dir, &file_name, &bytes, true).with_context(|| {
        format!(
            "Failed to write template {}",
            dir.join(&file_name).display()
        )
    })?;
    log::info!("Wrote {} {} template to {}", category, format, path.display());
    Ok(path)
}
