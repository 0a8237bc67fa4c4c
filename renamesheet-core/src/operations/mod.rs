//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each renamesheet operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod categories;
pub mod copy;
pub mod rename;
pub mod template;

// Re-export the main operation functions for easy access
pub use categories::categories_operation;
pub use copy::copy_operation;
pub use rename::rename_operation;
pub use template::template_operation;
