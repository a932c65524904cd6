use crate::scrub::ScrubberKind;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.codetidy.toml):
  Create this file in your project root to set defaults.
  Command-line flags take precedence.

  [codetidy]
  indent_width = 4             # Spaces per brace nesting level
  scrubber = \"textual\"         # \"textual\" or \"literal-aware\"
  simplify = true              # Rewrite `if (x == true)` and friends
  detect_unused = true         # Report unused variables and includes
  preview_chars = 300          # Characters of output shown in the preview
  output_suffix = \"tidy\"       # main.c -> main.tidy.c
  exclude_folders = [\"vendor\"] # Skipped when walking directories
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (stage statistics on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: one summary line per file.
    #[arg(long, conflicts_with = "json")]
    pub quiet: bool,

    /// Exit with code 1 if any unused variable or include is reported.
    #[arg(long)]
    pub fail_on_findings: bool,
}

/// Options controlling the processing stages.
#[derive(Args, Debug, Default, Clone)]
pub struct StageOptions {
    /// Force the language instead of detecting it from the extension
    /// (c, cpp, java, python).
    #[arg(short, long = "lang", value_name = "LANG")]
    pub language: Option<String>,

    /// Comment scrubber implementation.
    #[arg(long, value_enum)]
    pub scrubber: Option<ScrubberKind>,

    /// Spaces per indentation level.
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Do not rewrite redundant boolean comparisons.
    #[arg(long)]
    pub no_simplify: bool,

    /// Do not report unused variables and includes.
    #[arg(long)]
    pub no_unused: bool,
}

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "codetidy - strip comments, split statements, reindent braces and flag redundant code",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Source files or directories to process (.c, .cpp, .java, .py).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output file (only with a single input file).
    /// Defaults to `<stem>.tidy.<ext>` next to each input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Process and report without writing output files.
    #[arg(long)]
    pub dry_run: bool,

    /// Folders to exclude when walking directories.
    #[arg(long, alias = "exclude-folder")]
    pub exclude_folders: Vec<String>,

    /// Stage options.
    #[command(flatten)]
    pub stages: StageOptions,

    /// Output formatting options.
    #[command(flatten)]
    pub output_options: OutputOptions,
}
