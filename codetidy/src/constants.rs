use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the per-project configuration file.
pub const CONFIG_FILENAME: &str = ".codetidy.toml";

/// Number of spaces in one indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Number of output characters shown in the report preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 300;

/// Infix placed between the file stem and extension of generated outputs.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "tidy";

/// Regex for `//` line comments (C family and Java).
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_slash_line_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"//.*").expect("Invalid line comment regex pattern"))
}

/// Regex for `/* ... */` block comments, shortest match.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_block_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"/\*[\s\S]*?\*/").expect("Invalid block comment regex pattern"))
}

/// Regex for `#` line comments (Python).
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_hash_line_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"#.*").expect("Invalid hash comment regex pattern"))
}

/// Regex for `'''` docstrings.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_single_triple_quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"'''[\s\S]*?'''").expect("Invalid docstring regex pattern"))
}

/// Regex for `"""` docstrings.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_double_triple_quote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r#""""[\s\S]*?""""#).expect("Invalid docstring regex pattern"))
}

/// Regex for fixed-type variable declarations: `int x = 5;`, `bool done;`.
///
/// Group 1 is the type keyword, group 2 the identifier.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\b(int|float|double|char|bool)\s+(\w+)\s*(=[^;]*)?;")
            .expect("Invalid declaration regex pattern")
    })
}

/// Regex for angle-bracket includes. Group 1 is the header name.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_include_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"#include\s*<([^>]+)>").expect("Invalid include regex pattern"))
}

/// Known standard headers and the API symbols that count as a use of each.
///
/// Keys are header names with the first `.h` removed.
pub const HEADER_USAGE: &[(&str, &str)] = &[
    ("stdio", r"printf|scanf"),
    ("stdlib", r"malloc|free|exit"),
    ("string", r"strlen|strcpy|strcmp"),
    ("math", r"sqrt|pow|sin|cos"),
];

/// Set of folders skipped when walking directories.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert(".git");
        s.insert(".hg");
        s.insert(".svn");
        s.insert("target");
        s.insert("build");
        s.insert("dist");
        s.insert("node_modules");
        s.insert("__pycache__");
        s.insert("venv");
        s.insert(".venv");
        s
    })
}

pub use get_block_comment_re as BLOCK_COMMENT_RE;
pub use get_declaration_re as DECLARATION_RE;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_double_triple_quote_re as DOUBLE_TRIPLE_QUOTE_RE;
pub use get_hash_line_comment_re as HASH_LINE_COMMENT_RE;
pub use get_include_re as INCLUDE_RE;
pub use get_single_triple_quote_re as SINGLE_TRIPLE_QUOTE_RE;
pub use get_slash_line_comment_re as SLASH_LINE_COMMENT_RE;
