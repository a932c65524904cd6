use super::{remove_spans, CommentKind, CommentSpan, ScrubOutcome, Scrubber};
use crate::language::{CommentSyntax, LanguageKind};

/// Scanner-based scrubber that leaves string literal contents alone.
///
/// Single and double quoted literals are stepped over (honouring backslash
/// escapes and ending at a newline if unterminated). In brace languages a
/// `'` only counts as a character literal when it closes within a few bytes
/// and does not follow a letter or digit. Python triple-quoted
/// strings are still removed as block comments. An unterminated block
/// comment runs to the end of the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralAwareScrubber;

impl Scrubber for LiteralAwareScrubber {
    fn name(&self) -> &'static str {
        "literal-aware"
    }

    fn scrub(&self, text: &str, language: LanguageKind) -> ScrubOutcome {
        let spans = comment_spans(text, language.comment_syntax());
        let single = spans
            .iter()
            .filter(|s| s.kind == CommentKind::Line)
            .count();
        let block = spans.len() - single;
        ScrubOutcome::from_cleaned(&remove_spans(text, &spans), single, block)
    }
}

/// Locates comments in one forward pass.
///
/// All delimiters are ASCII, so every offset produced lies on a char boundary.
fn comment_spans(text: &str, syntax: CommentSyntax) -> Vec<CommentSpan> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    'scan: while i < bytes.len() {
        let rest = &bytes[i..];

        for (open, close) in syntax.blocks {
            if rest.starts_with(open.as_bytes()) {
                let body = i + open.len();
                let end = find(bytes, body, close.as_bytes()).map_or(bytes.len(), |p| p + close.len());
                spans.push(CommentSpan::new(i, end, CommentKind::Block));
                i = end;
                continue 'scan;
            }
        }

        if rest.starts_with(syntax.line.as_bytes()) {
            let end = find(bytes, i, b"\n").unwrap_or(bytes.len());
            spans.push(CommentSpan::new(i, end, CommentKind::Line));
            i = end;
            continue;
        }

        match bytes[i] {
            b'\'' if syntax.char_literals => i = char_literal_end(bytes, i).unwrap_or(i + 1),
            quote @ (b'"' | b'\'') => i = skip_literal(bytes, i + 1, quote),
            _ => i += 1,
        }
    }

    spans
}

/// Returns the offset just past the literal whose body starts at `i`.
fn skip_literal(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Longest body of a character literal, long enough for `'\U0001F600'`.
const CHAR_LITERAL_WINDOW: usize = 10;

/// End of the character literal opening at `i`, or `None` if the quote is an
/// apostrophe or digit separator (`don't`, `1'000`) rather than a literal.
fn char_literal_end(bytes: &[u8], i: usize) -> Option<usize> {
    if i > 0 && bytes[i - 1].is_ascii_alphanumeric() {
        return None;
    }
    let limit = (i + 2 + CHAR_LITERAL_WINDOW).min(bytes.len());
    let mut j = i + 1;
    while j < limit {
        match bytes[j] {
            b'\\' => j += 2,
            b'\n' => return None,
            b'\'' => return Some(j + 1),
            _ => j += 1,
        }
    }
    None
}

fn find(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}
