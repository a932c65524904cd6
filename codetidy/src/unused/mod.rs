//! Unused-symbol heuristics.
//!
//! Both detectors work on the final text of a file and know nothing about
//! scopes: a name is global to the file. They are advisory only.

mod includes;
mod variables;

pub use includes::{detect_unused_includes, include_targets};
pub use variables::{detect_unused_variables, find_declarations, Declaration};
