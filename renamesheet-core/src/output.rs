use crate::category::Category;
use crate::report::{RowReport, Tally, COMPLETED_MESSAGE};
use crate::template::{TemplateFormat, TemplateRow};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "summary" => Some(Self::Summary),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Result of the template command
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateResult {
    pub category: Category,
    pub format: TemplateFormat,
    pub path: PathBuf,
    pub example: TemplateRow,
}

/// Result of a path-mode rename
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub category: Category,
    pub folder: PathBuf,
    pub rows: Vec<RowReport>,
    pub tally: Tally,
}

/// Result of an upload-mode copy
#[derive(Debug, Serialize, Deserialize)]
pub struct CopyResult {
    pub category: Category,
    pub out_dir: PathBuf,
    pub rows: Vec<RowReport>,
    pub tally: Tally,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub label: String,
    pub extension: Option<String>,
    pub template_file_name: String,
}

/// Result of the categories command
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResult {
    pub categories: Vec<CategoryInfo>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat, use_color: bool) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(use_color),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self, use_color: bool) -> String;
}

fn write_rows(output: &mut String, rows: &[RowReport], use_color: bool) {
    for row in rows {
        writeln!(output, "{}", row.render(use_color)).unwrap();
    }
}

impl OutputFormatter for TemplateResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "template",
            "category": self.category,
            "format": self.format,
            "path": self.path,
            "example": self.example,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self, _use_color: bool) -> String {
        format!(
            "Template for {} written to {}\n",
            self.category,
            self.path.display()
        )
    }
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "rename",
            "category": self.category,
            "folder": self.folder,
            "rows": self.rows,
            "summary": self.tally,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self, use_color: bool) -> String {
        let mut output = String::new();
        write_rows(&mut output, &self.rows, use_color);
        writeln!(output, "{COMPLETED_MESSAGE}").unwrap();
        output
    }
}

impl OutputFormatter for CopyResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "copy",
            "category": self.category,
            "out_dir": self.out_dir,
            "rows": self.rows,
            "summary": self.tally,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self, use_color: bool) -> String {
        let mut output = String::new();
        write_rows(&mut output, &self.rows, use_color);
        if self.tally.succeeded > 0 {
            writeln!(
                output,
                "{COMPLETED_MESSAGE} {} renamed file(s) written to {}",
                self.tally.succeeded,
                self.out_dir.display()
            )
            .unwrap();
        }
        output
    }
}

impl OutputFormatter for CategoriesResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "categories",
            "categories": self.categories,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self, use_color: bool) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Disabled);
        if use_color {
            table.enforce_styling();
            table.set_header(vec![
                Cell::new("Category").fg(Color::Cyan),
                Cell::new("Extension").fg(Color::Cyan),
                Cell::new("Template").fg(Color::Cyan),
            ]);
        } else {
            table.set_header(vec!["Category", "Extension", "Template"]);
        }

        for info in &self.categories {
            table.add_row(vec![
                info.label.clone(),
                info.extension.clone().unwrap_or_else(|| "(any)".to_string()),
                info.template_file_name.clone(),
            ]);
        }

        format!("{table}\n")
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self, _use_color: bool) -> String {
        format!("{} {}", self.name, self.version)
    }
}
