//! Brace-depth reindentation.

use crate::canonicalize::Statement;
use crate::language::{LanguageKind, Layout};

/// Output of [`reindent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reindented {
    /// Statements joined by newlines, indented, outer whitespace trimmed.
    pub text: String,
    /// Deepest nesting level any statement was emitted at.
    pub max_depth: usize,
    /// Closing-brace statements met while already at depth zero.
    pub clamped_closers: usize,
}

/// Re-emits `statements` with indentation derived from brace depth.
///
/// For brace layouts, a statement starting with `}` is emitted one level
/// shallower (never below zero) and a statement ending with `{` opens a level
/// for the ones after it. Braces in the middle of a statement are ignored.
/// Indentation-significant layouts are joined unchanged.
pub fn reindent(statements: &[Statement], language: LanguageKind, indent_width: usize) -> Reindented {
    match language.layout() {
        Layout::Indentation => Reindented {
            text: statements
                .iter()
                .map(Statement::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            ..Reindented::default()
        },
        Layout::Braces => reindent_braces(statements, &" ".repeat(indent_width)),
    }
}

fn reindent_braces(statements: &[Statement], unit: &str) -> Reindented {
    let mut depth: usize = 0;
    let mut max_depth = 0;
    let mut clamped_closers = 0;
    let mut out = String::new();

    for statement in statements {
        if statement.starts_with('}') {
            if depth == 0 {
                clamped_closers += 1;
            }
            depth = depth.saturating_sub(1);
        }

        for _ in 0..depth {
            out.push_str(unit);
        }
        out.push_str(statement);
        out.push('\n');
        max_depth = max_depth.max(depth);

        if statement.ends_with('{') {
            depth += 1;
        }
    }

    Reindented {
        text: out.trim().to_owned(),
        max_depth,
        clamped_closers,
    }
}
