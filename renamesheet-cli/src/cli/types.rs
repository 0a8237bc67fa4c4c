use clap::ValueEnum;
use renamesheet_core::{Category, OutputFormat as CoreOutputFormat, TemplateFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Ies,
    Pdf,
    Gos,
    Png,
    /// Any file type; names are used exactly as written
    #[value(aliases = ["all-files", "all_files"])]
    All,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Ies => Self::Ies,
            CategoryArg::Pdf => Self::Pdf,
            CategoryArg::Gos => Self::Gos,
            CategoryArg::Png => Self::Png,
            CategoryArg::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TemplateFormatArg {
    Csv,
    Xlsx,
}

impl From<TemplateFormatArg> for TemplateFormat {
    fn from(arg: TemplateFormatArg) -> Self {
        match arg {
            TemplateFormatArg::Csv => Self::Csv,
            TemplateFormatArg::Xlsx => Self::Xlsx,
        }
    }
}
