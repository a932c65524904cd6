use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{
    CONFIG_FILENAME, DEFAULT_INDENT_WIDTH, DEFAULT_OUTPUT_SUFFIX, DEFAULT_PREVIEW_CHARS,
};
use crate::pipeline::TidyOptions;
use crate::scrub::ScrubberKind;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The `[codetidy]` section.
    pub codetidy: CodeTidyConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for codetidy. Unset keys fall back to defaults.
pub struct CodeTidyConfig {
    /// Spaces per indentation level.
    pub indent_width: Option<usize>,
    /// Comment scrubber: `"textual"` or `"literal-aware"`.
    pub scrubber: Option<ScrubberKind>,
    /// Whether to apply boolean comparison simplifications.
    pub simplify: Option<bool>,
    /// Whether to report unused variables and includes.
    pub detect_unused: Option<bool>,
    /// Number of output characters shown in the preview.
    pub preview_chars: Option<usize>,
    /// Infix for generated output names.
    pub output_suffix: Option<String>,
    /// Folders to skip when walking directories.
    pub exclude_folders: Option<Vec<String>>,
}

impl CodeTidyConfig {
    /// Stage options with defaults filled in.
    #[must_use]
    pub fn tidy_options(&self) -> TidyOptions {
        TidyOptions {
            indent_width: self.indent_width.unwrap_or(DEFAULT_INDENT_WIDTH),
            scrubber: self.scrubber.unwrap_or_default(),
            simplify: self.simplify.unwrap_or(true),
            detect_unused: self.detect_unused.unwrap_or(true),
            preview_chars: self.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS),
        }
    }

    /// Output infix with the default filled in.
    #[must_use]
    pub fn output_suffix(&self) -> String {
        self.output_suffix
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_SUFFIX.to_owned())
    }
}

impl Config {
    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// An unreadable or malformed file is skipped and the search continues.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(candidate);
                        return config;
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
