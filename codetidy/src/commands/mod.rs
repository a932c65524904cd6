//! Commands module - CLI command implementations.

mod tidy;

pub use tidy::{run_tidy, TidyCommandOptions};
