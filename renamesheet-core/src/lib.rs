#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod category;
pub mod config;
pub mod copy;
pub mod error;
pub mod mapping;
pub mod naming;
pub mod operations;
pub mod output;
pub mod rename;
pub mod report;
pub mod staging;
pub mod template;

pub use category::{Category, CategoryParseError};
pub use config::Config;
pub use copy::{copy_upload, copy_uploads, Upload};
pub use error::RunError;
pub use mapping::{
    load_mapping, parse_mapping_csv, parse_mapping_workbook, MappingError, MappingRecord,
    MappingTable, NEW_COLUMN, OLD_COLUMN,
};
pub use naming::{apply_extension, is_plain_file_name};
pub use operations::{categories_operation, copy_operation, rename_operation, template_operation};
pub use output::{
    CategoriesResult, CategoryInfo, CopyResult, OutputFormat, OutputFormatter, RenameResult,
    TemplateResult, VersionResult,
};
pub use rename::rename_in_folder;
pub use report::{Outcome, RowReport, Status, Tally, COMPLETED_MESSAGE};
pub use template::{build_template, render_template, write_template, TemplateFormat, TemplateRow};
