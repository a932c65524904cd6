//! Comment scrubbing.
//!
//! A [`Scrubber`] removes comments from raw source text and returns the
//! remaining non-empty, trimmed lines together with the number of comments
//! it removed. Two implementations exist:
//!
//! - [`TextualScrubber`]: delimiter matching with regular expressions, in
//!   separate passes per comment form. Comment-like text inside string
//!   literals is removed too.
//! - [`LiteralAwareScrubber`]: a single forward scan that steps over string
//!   and character literals so their contents survive.
//!
//! Downstream stages only see [`ScrubOutcome`], so either can be used.

mod literal;
mod textual;

pub use literal::LiteralAwareScrubber;
pub use textual::TextualScrubber;

use crate::language::LanguageKind;
use serde::Deserialize;
use std::fmt;

/// Classification of a comment span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// Runs from its delimiter to end of line.
    Line,
    /// Runs from an opening delimiter to the nearest closing one.
    Block,
}

/// Half-open byte range `[start, end)` holding a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Comment form.
    pub kind: CommentKind,
}

impl CommentSpan {
    /// Creates a span.
    #[must_use]
    pub const fn new(start: usize, end: usize, kind: CommentKind) -> Self {
        Self { start, end, kind }
    }
}

/// Result of scrubbing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrubOutcome {
    /// Remaining lines, trimmed, empty lines dropped, in source order.
    pub lines: Vec<String>,
    /// Number of line comments removed.
    pub single_line_comments: usize,
    /// Number of block comments (or docstrings) removed.
    pub block_comments: usize,
}

impl ScrubOutcome {
    /// Splits cleaned text into trimmed, non-empty lines.
    #[must_use]
    pub fn from_cleaned(cleaned: &str, single_line_comments: usize, block_comments: usize) -> Self {
        let lines = cleaned
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self {
            lines,
            single_line_comments,
            block_comments,
        }
    }
}

/// A comment remover.
pub trait Scrubber: Send + Sync {
    /// Short name used in verbose output.
    fn name(&self) -> &'static str;

    /// Removes comments from `text` according to `language`'s syntax.
    fn scrub(&self, text: &str, language: LanguageKind) -> ScrubOutcome;
}

/// Deletes `spans` from `text`.
///
/// Spans must be sorted by start and must not overlap.
#[must_use]
pub fn remove_spans(text: &str, spans: &[CommentSpan]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            out.push_str(&text[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    if cursor < text.len() {
        out.push_str(&text[cursor..]);
    }
    out
}

/// Which scrubber implementation a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScrubberKind {
    /// Regex passes, not string-literal aware.
    #[default]
    Textual,
    /// Forward scanner that preserves string literal contents.
    LiteralAware,
}

impl ScrubberKind {
    /// Returns the scrubber for this kind.
    #[must_use]
    pub fn scrubber(self) -> &'static dyn Scrubber {
        match self {
            Self::Textual => &TextualScrubber,
            Self::LiteralAware => &LiteralAwareScrubber,
        }
    }
}

impl fmt::Display for ScrubberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scrubber().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_spans() {
        let text = "a /*x*/ b // y\nc";
        let spans = [
            CommentSpan::new(2, 7, CommentKind::Block),
            CommentSpan::new(10, 14, CommentKind::Line),
        ];
        assert_eq!(remove_spans(text, &spans), "a  b \nc");
        assert_eq!(remove_spans(text, &[]), text);
    }

    #[test]
    fn test_outcome_trims_and_drops_empty_lines() {
        let outcome = ScrubOutcome::from_cleaned("  int x;  \n\n   \n\tx++;\r\n", 2, 1);
        assert_eq!(outcome.lines, vec!["int x;", "x++;"]);
        assert_eq!(outcome.single_line_comments, 2);
        assert_eq!(outcome.block_comments, 1);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ScrubberKind::Textual.to_string(), "textual");
        assert_eq!(ScrubberKind::LiteralAware.to_string(), "literal-aware");
    }
}
