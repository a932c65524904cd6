//! Supported language families and their per-family strategies.
//!
//! Every family-specific decision in the pipeline (comment syntax, layout
//! model, naming) is an exhaustive `match` on [`LanguageKind`], so adding a
//! family is a local change to this file plus the compiler's list of
//! non-exhaustive matches.

use crate::error::TidyError;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A supported source language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    /// C and C++ sources (`.c`, `.cpp`).
    CFamily,
    /// Java sources (`.java`).
    Java,
    /// Python sources (`.py`).
    Python,
}

/// How nesting is expressed in a language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Nesting is delimited by `{` and `}`; indentation is recomputed.
    Braces,
    /// Indentation is significant and must be left untouched.
    Indentation,
}

/// Comment delimiters of a language family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Prefix that starts a comment running to end of line.
    pub line: &'static str,
    /// Opening/closing delimiter pairs of block comments.
    pub blocks: &'static [(&'static str, &'static str)],
    /// `'` opens a short character literal rather than a string.
    pub char_literals: bool,
}

const SLASH_COMMENTS: CommentSyntax = CommentSyntax {
    line: "//",
    blocks: &[("/*", "*/")],
    char_literals: true,
};

const HASH_COMMENTS: CommentSyntax = CommentSyntax {
    line: "#",
    blocks: &[("'''", "'''"), ("\"\"\"", "\"\"\"")],
    char_literals: false,
};

impl LanguageKind {
    /// Every supported family, in reporting order.
    pub const ALL: [Self; 3] = [Self::CFamily, Self::Java, Self::Python];

    /// Maps a file extension to a language family.
    ///
    /// The comparison is case-sensitive: `main.C` is not recognized.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext))
    }

    /// Extensions recognized for this family.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::CFamily => &["c", "cpp"],
            Self::Java => &["java"],
            Self::Python => &["py"],
        }
    }

    /// Nesting model used by the reindenter.
    #[must_use]
    pub const fn layout(self) -> Layout {
        match self {
            Self::CFamily | Self::Java => Layout::Braces,
            Self::Python => Layout::Indentation,
        }
    }

    /// Comment delimiters used by the scrubbers.
    #[must_use]
    pub const fn comment_syntax(self) -> CommentSyntax {
        match self {
            Self::CFamily | Self::Java => SLASH_COMMENTS,
            Self::Python => HASH_COMMENTS,
        }
    }

    /// Short lowercase name, as accepted by `--lang`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CFamily => "c",
            Self::Java => "java",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CFamily => "C/C++",
            Self::Java => "Java",
            Self::Python => "Python",
        };
        f.write_str(label)
    }
}

impl FromStr for LanguageKind {
    type Err = TidyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let canonical = match lowered.as_str() {
            "cpp" | "c++" => "c",
            "py" => "python",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == canonical)
            .ok_or_else(|| TidyError::UnknownLanguageName(s.to_owned()))
    }
}

/// Human-readable list of supported extensions: `.c, .cpp, .java, or .py`.
#[must_use]
pub fn supported_extensions_hint() -> String {
    let exts: Vec<String> = LanguageKind::ALL
        .iter()
        .flat_map(|kind| kind.extensions())
        .map(|ext| format!(".{ext}"))
        .collect();
    match exts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// Language selection for a run: detect from the extension or force one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageChoice {
    /// Detect from the file extension.
    #[default]
    Auto,
    /// Use this language regardless of the extension.
    Fixed(LanguageKind),
}

impl LanguageChoice {
    /// Resolves the language for `path`.
    pub fn resolve(self, path: &Path) -> Result<LanguageKind, TidyError> {
        match self {
            Self::Fixed(kind) => Ok(kind),
            Self::Auto => {
                LanguageKind::from_path(path).ok_or_else(|| TidyError::UnsupportedLanguage {
                    path: path.to_path_buf(),
                })
            }
        }
    }
}
