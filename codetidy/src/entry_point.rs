use crate::cli::Cli;
use crate::commands::{run_tidy, TidyCommandOptions};
use crate::config::Config;
use crate::language::{LanguageChoice, LanguageKind};
use anyhow::Result;
use clap::Parser;

/// Runs codetidy with the given arguments.
///
/// # Errors
///
/// Returns an error if argument parsing fails, or if the command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run codetidy with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["codetidy".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let language = match cli_var.stages.language.as_deref() {
        None => LanguageChoice::Auto,
        Some(name) => match name.parse::<LanguageKind>() {
            Ok(kind) => LanguageChoice::Fixed(kind),
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(1);
            }
        },
    };

    // Load config from the first path or current directory
    let config_path = cli_var
        .paths
        .first()
        .map_or(std::path::Path::new("."), std::path::PathBuf::as_path);
    let config = Config::load_from_path(config_path);

    let mut tidy = config.codetidy.tidy_options();
    if let Some(indent) = cli_var.stages.indent {
        tidy.indent_width = indent;
    }
    if let Some(scrubber) = cli_var.stages.scrubber {
        tidy.scrubber = scrubber;
    }
    if cli_var.stages.no_simplify {
        tidy.simplify = false;
    }
    if cli_var.stages.no_unused {
        tidy.detect_unused = false;
    }

    let mut exclude_folders = config.codetidy.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli_var.exclude_folders.clone());

    let output_options = &cli_var.output_options;
    if output_options.verbose && !output_options.json {
        eprintln!("[VERBOSE] codetidy v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Using {} threads", rayon::current_num_threads());
        if let Some(path) = &config.config_file_path {
            eprintln!("[VERBOSE] Config file: {}", path.display());
        }
        eprintln!("[VERBOSE] Configuration:");
        eprintln!("   Paths: {:?}", cli_var.paths);
        eprintln!("   Language: {language:?}");
        eprintln!("   Scrubber: {}", tidy.scrubber);
        eprintln!("   Indent width: {}", tidy.indent_width);
        eprintln!("   Simplify: {}", tidy.simplify);
        eprintln!("   Detect unused: {}", tidy.detect_unused);
        eprintln!("   Excludes: {exclude_folders:?}");
        eprintln!();
    }

    let options = TidyCommandOptions {
        output: cli_var.output.clone(),
        dry_run: cli_var.dry_run,
        language,
        tidy,
        output_suffix: config.codetidy.output_suffix(),
        exclude: exclude_folders,
        json: output_options.json,
        quiet: output_options.quiet,
        verbose: output_options.verbose,
        fail_on_findings: output_options.fail_on_findings,
    };

    run_tidy(&cli_var.paths, &options, writer)
}
