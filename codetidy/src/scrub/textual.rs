use super::{remove_spans, CommentKind, CommentSpan, ScrubOutcome, Scrubber};
use crate::constants::{
    BLOCK_COMMENT_RE, DOUBLE_TRIPLE_QUOTE_RE, HASH_LINE_COMMENT_RE, SINGLE_TRIPLE_QUOTE_RE,
    SLASH_LINE_COMMENT_RE,
};
use crate::language::LanguageKind;
use regex::Regex;

/// Regex-based scrubber.
///
/// Each comment form is removed in its own pass, line comments first, and
/// every pass runs on the output of the previous one. A `//` inside a block
/// comment is therefore removed as a line comment before the block pass
/// runs. For Python the `'''` pass runs before the `"""` pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextualScrubber;

impl Scrubber for TextualScrubber {
    fn name(&self) -> &'static str {
        "textual"
    }

    fn scrub(&self, text: &str, language: LanguageKind) -> ScrubOutcome {
        let passes: Vec<(&Regex, CommentKind)> = match language {
            LanguageKind::CFamily | LanguageKind::Java => vec![
                (SLASH_LINE_COMMENT_RE(), CommentKind::Line),
                (BLOCK_COMMENT_RE(), CommentKind::Block),
            ],
            LanguageKind::Python => vec![
                (HASH_LINE_COMMENT_RE(), CommentKind::Line),
                (SINGLE_TRIPLE_QUOTE_RE(), CommentKind::Block),
                (DOUBLE_TRIPLE_QUOTE_RE(), CommentKind::Block),
            ],
        };

        let mut current = text.to_owned();
        let mut single = 0;
        let mut block = 0;
        for (re, kind) in passes {
            let (next, removed) = strip_pass(&current, re, kind);
            match kind {
                CommentKind::Line => single += removed,
                CommentKind::Block => block += removed,
            }
            current = next;
        }

        ScrubOutcome::from_cleaned(&current, single, block)
    }
}

fn strip_pass(text: &str, re: &Regex, kind: CommentKind) -> (String, usize) {
    let spans: Vec<CommentSpan> = re
        .find_iter(text)
        .map(|m| CommentSpan::new(m.start(), m.end(), kind))
        .collect();
    (remove_spans(text, &spans), spans.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrub(text: &str, language: LanguageKind) -> ScrubOutcome {
        TextualScrubber.scrub(text, language)
    }

    #[test]
    fn test_c_line_and_block_comments() {
        let code = "int a = 1; // first\n/* block\n spanning */ int b = 2;\n// whole line\nreturn a;";
        let out = scrub(code, LanguageKind::CFamily);
        assert_eq!(out.single_line_comments, 2);
        assert_eq!(out.block_comments, 1);
        assert_eq!(out.lines, vec!["int a = 1;", "int b = 2;", "return a;"]);
    }

    #[test]
    fn test_block_comments_are_non_greedy() {
        let code = "a /* one */ b /* two */ c";
        let out = scrub(code, LanguageKind::Java);
        assert_eq!(out.block_comments, 2);
        assert_eq!(out.lines, vec!["a  b  c"]);
    }

    #[test]
    fn test_line_comment_inside_string_is_removed() {
        // Known limitation of the textual scrubber.
        let code = "printf(\"http://example.com\");";
        let out = scrub(code, LanguageKind::CFamily);
        assert_eq!(out.single_line_comments, 1);
        assert_eq!(out.lines, vec!["printf(\"http:"]);
    }

    #[test]
    fn test_line_pass_runs_before_block_pass() {
        // The `//` eats the closing `*/`, so the block never closes.
        let code = "/* a // b */\nint x;";
        let out = scrub(code, LanguageKind::CFamily);
        assert_eq!(out.single_line_comments, 1);
        assert_eq!(out.block_comments, 0);
        assert_eq!(out.lines, vec!["/* a", "int x;"]);
    }

    #[test]
    fn test_python_hash_and_docstrings() {
        let code = "'''module doc'''\ndef f():\n    \"\"\"fn\n    doc\"\"\"\n    return 1  # answer\n# trailing";
        let out = scrub(code, LanguageKind::Python);
        assert_eq!(out.single_line_comments, 2);
        assert_eq!(out.block_comments, 2);
        assert_eq!(out.lines, vec!["def f():", "return 1"]);
    }

    #[test]
    fn test_mismatched_triple_quotes_first_pass_wins() {
        let out = scrub("'''a \"\"\"b''' c\"\"\"\nz = 1", LanguageKind::Python);
        assert_eq!(out.single_line_comments, 0);
        assert_eq!(out.block_comments, 1);
        assert_eq!(out.lines, vec!["c\"\"\"", "z = 1"]);
    }

    #[test]
    fn test_python_does_not_treat_slashes_as_comments() {
        let out = scrub("x = 4 // 2", LanguageKind::Python);
        assert_eq!(out.single_line_comments, 0);
        assert_eq!(out.lines, vec!["x = 4 // 2"]);
    }

    #[test]
    fn test_unterminated_block_is_left_in_place() {
        let out = scrub("int x; /* never closed\nint y;", LanguageKind::CFamily);
        assert_eq!(out.block_comments, 0);
        assert_eq!(out.lines, vec!["int x; /* never closed", "int y;"]);
    }
}
