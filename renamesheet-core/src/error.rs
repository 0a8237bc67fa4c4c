use thiserror::Error;

/// Failures that stop a run before any row is processed.
///
/// Row-level problems are never errors; they are reported as
/// [`Outcome`](crate::report::Outcome)s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("please provide both the folder path and the mapping file")]
    MissingFolderOrMapping,

    #[error("please provide the files to rename and the mapping file")]
    MissingUploadsOrMapping,
}
