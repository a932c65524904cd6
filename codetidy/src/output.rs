use crate::pipeline::TidyReport;
use crate::utils::normalize_display_path;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Progress bar for a batch of `total_files`.
///
/// The message slot shows the last file finished; see [`mark_file_done`].
/// Hidden in test builds.
#[must_use]
pub fn create_progress_bar(total_files: u64) -> ProgressBar {
    if cfg!(test) {
        return ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::hidden());
    }

    let pb =
        ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} tidy [{bar:30.cyan/blue}] {pos}/{len} {wide_msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Advances `pb` by one file and names the file in its message.
pub fn mark_file_done(pb: &ProgressBar, file: &Path) {
    pb.set_message(normalize_display_path(file));
    pb.inc(1);
}

/// Print the main header with box-drawing characters.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "╔════════════════════════════════════════╗".cyan()
    )?;
    writeln!(
        writer,
        "{}",
        "║  Code Tidy Results                     ║".cyan().bold()
    )?;
    writeln!(
        writer,
        "{}",
        "╚════════════════════════════════════════╝".cyan()
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn saved_cell(lines_saved: i64) -> Cell {
    let color = if lines_saved < 0 {
        Color::Red
    } else {
        Color::Green
    };
    Cell::new(lines_saved).fg(color)
}

/// Print the full report for one file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_report(writer: &mut impl Write, report: &TidyReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} ({})",
        "[OK] Code optimization & formatting complete:".green().bold(),
        report.file.bold(),
        report.language
    )?;

    let mut table = create_table(vec![
        "Original Lines",
        "Optimized Lines",
        "Lines Saved",
        "Line Comments Removed",
        "Block Comments Removed",
    ]);
    table.add_row(vec![
        Cell::new(report.original_lines),
        Cell::new(report.output_lines),
        saved_cell(report.lines_saved),
        Cell::new(report.single_line_comments),
        Cell::new(report.block_comments),
    ]);
    writeln!(writer, "{table}")?;

    if !report.unused_variables.is_empty() {
        writeln!(writer, "\n{}", "Unused Variables:".yellow().bold())?;
        for name in &report.unused_variables {
            writeln!(writer, "- {name}")?;
        }
    }

    if !report.unused_includes.is_empty() {
        writeln!(writer, "\n{}", "Unused Includes:".yellow().bold())?;
        for header in &report.unused_includes {
            writeln!(writer, "- #include <{header}>")?;
        }
    }

    if !report.suggestions.is_empty() {
        writeln!(writer, "\n{}", "Simplifications Applied:".cyan().bold())?;
        for suggestion in &report.suggestions {
            writeln!(writer, "- {suggestion}")?;
        }
    }

    match &report.output_file {
        Some(path) => writeln!(writer, "\nOutput saved to: {}", path.bold())?,
        None => writeln!(writer, "\n{}", "Dry run: no output written".dimmed())?,
    }

    writeln!(writer, "\n{}\n", "Preview:".bold().underline())?;
    writeln!(writer, "{}", report.preview)?;
    writeln!(writer)?;
    Ok(())
}

/// Print a single summary line for one file.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_report_quiet(writer: &mut impl Write, report: &TidyReport) -> std::io::Result<()> {
    let findings = report.finding_count();
    let findings = if findings == 0 {
        findings.to_string().green()
    } else {
        findings.to_string().red().bold()
    };
    writeln!(
        writer,
        "{}: {} -> {} lines, {} comments removed, {} simplifications, {} findings",
        report.file,
        report.original_lines,
        report.output_lines,
        report.single_line_comments + report.block_comments,
        report.suggestions.len(),
        findings
    )
}

/// Print the totals line after a batch.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_batch_summary(
    writer: &mut impl Write,
    reports: &[TidyReport],
    failures: usize,
) -> std::io::Result<()> {
    let saved: i64 = reports.iter().map(|r| r.lines_saved).sum();
    let comments: usize = reports
        .iter()
        .map(|r| r.single_line_comments + r.block_comments)
        .sum();
    let findings: usize = reports.iter().map(TidyReport::finding_count).sum();

    let failed = if failures == 0 {
        failures.to_string().green()
    } else {
        failures.to_string().red().bold()
    };
    writeln!(
        writer,
        "{}",
        format!(
            "Processed {} files ({} failed): {} lines saved, {} comments removed, {} findings",
            reports.len(),
            failed,
            saved,
            comments,
            findings
        )
        .dimmed()
    )
}
