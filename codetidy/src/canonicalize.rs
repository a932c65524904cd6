//! Statement re-segmentation.
//!
//! Splits lines holding several `;`-terminated statements into one statement
//! per line. Purely textual: a `;` inside parentheses or a string literal is
//! still a split point, so a `for (i = 0; i < n; i++)` header is split too.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Statement terminator.
pub const TERMINATOR: char = ';';

/// A trimmed, non-empty unit of code after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Statement(String);

impl Statement {
    /// Wraps `text` if it is non-empty after trimming.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Statement text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Statement {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits every line on `;` and re-emits one statement per fragment.
///
/// Every fragment except the last piece of its line gets the terminator
/// back. Empty fragments are dropped, which is how a trailing `;` ends up
/// attached to the fragment before it and never emitted on its own.
///
/// Unlike a plain split, a line made of nothing but terminators (`;;`) is kept
/// whole as one statement, so the output never has fewer statements than the
/// input has lines.
pub fn canonicalize<S: AsRef<str>>(lines: &[S]) -> Vec<Statement> {
    let mut statements = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        if !line.contains(TERMINATOR) {
            statements.extend(Statement::new(line));
            continue;
        }

        let parts: Vec<&str> = line.split(TERMINATOR).collect();
        if parts.iter().all(|part| part.trim().is_empty()) {
            statements.extend(Statement::new(line));
            continue;
        }
        let last = parts.len() - 1;
        for (i, part) in parts.iter().enumerate() {
            let fragment = part.trim();
            if fragment.is_empty() {
                continue;
            }
            let text = if i < last {
                format!("{fragment}{TERMINATOR}")
            } else {
                fragment.to_owned()
            };
            statements.push(Statement(text));
        }
    }

    statements
}
