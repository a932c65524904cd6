//! Core library for the codetidy source cleanup tool.
//!
//! Each input file goes through the same pipeline: comments are scrubbed,
//! the remaining text is split into one statement per line, brace blocks are
//! reindented, redundant boolean comparisons are rewritten, and unused
//! variables and includes are reported.

#![allow(
    clippy::similar_names,
    clippy::map_unwrap_or,
    clippy::items_after_statements
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

/// Statement splitting on `;`.
pub mod canonicalize;

/// Module defining the command-line interface arguments and structs.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module for loading configuration.
pub mod config;

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Source text paired with its path and language.
pub mod document;

/// Module defining the entry point logic.
pub mod entry_point;

/// Error types.
pub mod error;

/// Language detection and per-language syntax.
pub mod language;

/// Module for rich CLI output formatting with colored text and tables.
pub mod output;

/// The per-file pipeline and its report.
pub mod pipeline;

/// Brace-depth reindentation.
pub mod reindent;

/// Comment removal.
pub mod scrub;

/// Boolean comparison rewrites.
pub mod simplify;

/// Unused variable and include detection.
pub mod unused;

/// Module containing utility functions.
pub mod utils;
