use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{CategoryArg, OutputFormat, TemplateFormatArg};

/// Bulk-rename files from a two-column mapping spreadsheet
#[derive(Parser, Debug)]
#[command(name = "renamesheet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a mapping template for a file category
    Template {
        /// File category (ies, pdf, gos, png, all)
        #[arg(long, value_enum, ignore_case = true)]
        category: Option<CategoryArg>,

        /// Directory to write the template into
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Template file format
        #[arg(long, value_enum, default_value = "csv")]
        format: TemplateFormatArg,

        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Rename files in a folder according to a mapping file
    Rename {
        /// File category (ies, pdf, gos, png, all)
        #[arg(long, value_enum, ignore_case = true)]
        category: Option<CategoryArg>,

        /// Folder containing the files to rename
        #[arg(long, value_name = "DIR")]
        folder: Option<PathBuf>,

        /// Mapping file (.csv, .xlsx, .xls, .ods) with "Old File Name" and "New File Name" columns
        #[arg(long, value_name = "FILE")]
        mapping: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,

        /// Suppress the status report
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Write renamed copies of the given files into an output directory
    Copy {
        /// Files to rename; each is matched by its file name
        #[arg(value_name = "FILES")]
        files: Vec<PathBuf>,

        /// File category (ies, pdf, gos, png, all)
        #[arg(long, value_enum, ignore_case = true)]
        category: Option<CategoryArg>,

        /// Mapping file (.csv, .xlsx, .xls, .ods) with "Old File Name" and "New File Name" columns
        #[arg(long, value_name = "FILE")]
        mapping: Option<PathBuf>,

        /// Directory that receives the renamed copies
        #[arg(long, value_name = "DIR", default_value = "renamed")]
        out_dir: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,

        /// Suppress the status report
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List the available file categories
    Categories {
        /// Output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
