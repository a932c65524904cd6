//! The tidy command: run the pipeline over every requested file.

use crate::error::TidyError;
use crate::language::{supported_extensions_hint, LanguageChoice};
use crate::output;
use crate::pipeline::{self, PipelineConfig, TidyOptions, TidyReport};
use crate::utils::{collect_source_files, normalize_display_path};

use anyhow::Result;
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Options for the tidy command
#[derive(Debug, Clone, Default)]
pub struct TidyCommandOptions {
    /// Explicit output file (single input only).
    pub output: Option<PathBuf>,
    /// Skip writing outputs.
    pub dry_run: bool,
    /// Language detection or override.
    pub language: LanguageChoice,
    /// Stage options.
    pub tidy: TidyOptions,
    /// Infix for derived output names.
    pub output_suffix: String,
    /// Folders skipped while walking directories.
    pub exclude: Vec<String>,
    /// Output in JSON format.
    pub json: bool,
    /// One line per file.
    pub quiet: bool,
    /// Per-file stage statistics on stderr.
    pub verbose: bool,
    /// Exit with 1 when any unused symbol is reported.
    pub fail_on_findings: bool,
}

/// Executes the tidy command over `paths`.
///
/// Files are processed in parallel and reported in input order. Returns the
/// process exit code: 1 if any file failed or, with `fail_on_findings`, if
/// anything was reported unused.
///
/// # Errors
///
/// Returns an error if writing the report or JSON serialization fails.
pub fn run_tidy<W: Write>(
    paths: &[PathBuf],
    options: &TidyCommandOptions,
    writer: &mut W,
) -> Result<i32> {
    let files: Vec<PathBuf> = paths
        .iter()
        .flat_map(|root| {
            collect_source_files(root, &options.exclude, &options.output_suffix, options.verbose)
        })
        .collect();

    if options.output.is_some() && files.len() != 1 {
        let err = TidyError::InvalidOutput(format!(
            "--output needs exactly one input file, got {}",
            files.len()
        ));
        eprintln!("Error: {err}");
        return Ok(1);
    }

    if files.is_empty() {
        eprintln!("Error: No {} files found.", supported_extensions_hint());
        return Ok(1);
    }

    let progress = if files.len() > 1 && !options.json && !options.quiet {
        Some(output::create_progress_bar(files.len() as u64))
    } else {
        None
    };

    let results: Vec<(PathBuf, Result<TidyReport, TidyError>)> = files
        .par_iter()
        .map(|file| {
            let config = PipelineConfig {
                input_path: file.clone(),
                output_path: options.output.clone(),
                language: options.language,
                output_suffix: options.output_suffix.clone(),
                dry_run: options.dry_run,
                options: options.tidy.clone(),
            };
            let result = pipeline::run(&config);
            if let Some(pb) = &progress {
                output::mark_file_done(pb, file);
            }
            (file.clone(), result)
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let mut reports = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (file, result) in results {
        match result {
            Ok(report) => {
                if options.verbose && !options.json {
                    eprintln!(
                        "[VERBOSE] {} [{}]: {} statements, max depth {}, {} clamped closers",
                        report.file,
                        report.language,
                        report.statements,
                        report.max_depth,
                        report.clamped_closers
                    );
                }
                reports.push(report);
            }
            Err(e) => {
                failures += 1;
                if options.verbose && !options.json {
                    eprintln!("[VERBOSE] {} failed", normalize_display_path(&file));
                }
                eprintln!("Error: {e}");
            }
        }
    }

    if options.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else if options.quiet {
        for report in &reports {
            output::print_report_quiet(writer, report)?;
        }
    } else if !reports.is_empty() {
        output::print_header(writer)?;
        for report in &reports {
            output::print_file_report(writer, report)?;
        }
    }

    if !options.json && files.len() > 1 {
        output::print_batch_summary(writer, &reports, failures)?;
    }

    let findings: usize = reports.iter().map(TidyReport::finding_count).sum();
    if failures > 0 || (options.fail_on_findings && findings > 0) {
        Ok(1)
    } else {
        Ok(0)
    }
}
