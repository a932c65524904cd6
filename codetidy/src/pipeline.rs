//! The tidy pipeline: scrub, canonicalize, reindent, simplify, detect.
//!
//! [`process`] is pure and works on an in-memory [`SourceDocument`].
//! [`run`] adds the read before and the write after, and is the entry point
//! used by the CLI. Separate runs share no state, so files can be processed
//! in parallel.

use crate::canonicalize::canonicalize;
use crate::constants::{DEFAULT_INDENT_WIDTH, DEFAULT_OUTPUT_SUFFIX, DEFAULT_PREVIEW_CHARS};
use crate::document::SourceDocument;
use crate::error::TidyError;
use crate::language::{LanguageChoice, LanguageKind};
use crate::reindent::reindent;
use crate::scrub::ScrubberKind;
use crate::simplify::{simplify, Suggestion};
use crate::unused::{detect_unused_includes, detect_unused_variables};
use crate::utils::normalize_display_path;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Knobs for the processing stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidyOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Comment remover to use.
    pub scrubber: ScrubberKind,
    /// Apply the boolean comparison rewrites.
    pub simplify: bool,
    /// Run the unused variable and include detectors.
    pub detect_unused: bool,
    /// Characters of output kept in the report preview.
    pub preview_chars: usize,
}

impl Default for TidyOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            scrubber: ScrubberKind::default(),
            simplify: true,
            detect_unused: true,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Everything needed for one file's run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// File to read.
    pub input_path: PathBuf,
    /// File to write. Derived from the input when `None`.
    pub output_path: Option<PathBuf>,
    /// Language detection or override.
    pub language: LanguageChoice,
    /// Infix for derived output names (`main.c` becomes `main.<suffix>.c`).
    pub output_suffix: String,
    /// Process and report without writing anything.
    pub dry_run: bool,
    /// Stage options.
    pub options: TidyOptions,
}

impl PipelineConfig {
    /// A config for `input_path` with default settings.
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            language: LanguageChoice::Auto,
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_owned(),
            dry_run: false,
            options: TidyOptions::default(),
        }
    }

    /// Where the output of this run goes.
    #[must_use]
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_path, &self.output_suffix))
    }
}

/// Summary of one file's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TidyReport {
    /// Input file.
    pub file: String,
    /// Language the file was processed as.
    pub language: LanguageKind,
    /// Written output file, `None` for dry runs.
    pub output_file: Option<String>,
    /// Lines in the input.
    pub original_lines: usize,
    /// Lines in the output.
    pub output_lines: usize,
    /// `original_lines - output_lines`; negative when splitting added lines.
    pub lines_saved: i64,
    /// Line comments removed.
    pub single_line_comments: usize,
    /// Block comments or docstrings removed.
    pub block_comments: usize,
    /// Statements after canonicalization.
    pub statements: usize,
    /// Deepest indentation level emitted.
    pub max_depth: usize,
    /// Closing braces met at depth zero.
    pub clamped_closers: usize,
    /// Variables that look unused.
    pub unused_variables: Vec<String>,
    /// Included headers that look unused.
    pub unused_includes: Vec<String>,
    /// Simplifications applied, in order.
    pub suggestions: Vec<Suggestion>,
    /// Leading excerpt of the output.
    pub preview: String,
}

impl TidyReport {
    /// Number of unused-symbol findings.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.unused_variables.len() + self.unused_includes.len()
    }
}

/// Output text and report of [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Fully processed source.
    pub output: String,
    /// Statistics and findings.
    pub report: TidyReport,
}

/// Runs every stage over `doc`. No I/O.
pub fn process(doc: &SourceDocument, options: &TidyOptions) -> Processed {
    let language = doc.language();

    let scrubbed = options.scrubber.scrubber().scrub(doc.text(), language);
    let statements = canonicalize(&scrubbed.lines);
    let reindented = reindent(&statements, language, options.indent_width);

    let (output, suggestions) = if options.simplify {
        simplify(&reindented.text)
    } else {
        (reindented.text, Vec::new())
    };

    let (unused_variables, unused_includes) = if options.detect_unused {
        (
            detect_unused_variables(&output),
            detect_unused_includes(&output),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    let original_lines = line_count(doc.text());
    let output_lines = line_count(&output);
    let report = TidyReport {
        file: normalize_display_path(doc.path()),
        language,
        output_file: None,
        original_lines,
        output_lines,
        lines_saved: original_lines as i64 - output_lines as i64,
        single_line_comments: scrubbed.single_line_comments,
        block_comments: scrubbed.block_comments,
        statements: statements.len(),
        max_depth: reindented.max_depth,
        clamped_closers: reindented.clamped_closers,
        unused_variables,
        unused_includes,
        suggestions,
        preview: output.chars().take(options.preview_chars).collect(),
    };

    Processed { output, report }
}

/// Reads, processes and writes one file.
///
/// The output is written to a temporary sibling first and renamed into place,
/// so a failed write never leaves a partial file behind.
pub fn run(config: &PipelineConfig) -> Result<TidyReport, TidyError> {
    let doc = SourceDocument::load(&config.input_path, config.language)?;
    let Processed { output, mut report } = process(&doc, &config.options);

    if !config.dry_run {
        let output_path = config.resolved_output_path();
        write_atomically(&output_path, &output)?;
        report.output_file = Some(normalize_display_path(&output_path));
    }

    Ok(report)
}

/// Derives `dir/stem.<suffix>.ext` from `dir/stem.ext`.
#[must_use]
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}.{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{suffix}"),
    };
    input.with_file_name(name)
}

fn write_atomically(path: &Path, content: &str) -> Result<(), TidyError> {
    write_via_temp(path, |tmp| fs::write(tmp, content))
}

/// Runs `write` against a hidden sibling of `path`, then renames it into
/// place. The sibling is removed whenever either step fails.
fn write_via_temp<F>(path: &Path, write: F) -> Result<(), TidyError>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    let file_name = path
        .file_name()
        .ok_or_else(|| TidyError::InvalidOutput(format!("'{}' is not a file path", path.display())))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    if let Err(source) = write(&tmp).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(TidyError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Number of `\n`-separated segments, so `""` counts as one line.
#[must_use]
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}
