//! Utilities module for codetidy.
//!
//! Path handling and source file discovery shared by the pipeline and the CLI.

mod paths;

pub use paths::{collect_source_files, is_excluded, is_generated_output, normalize_display_path};
