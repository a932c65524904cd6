//! Redundant boolean comparison rewrites.
//!
//! A fixed, ordered rule table. Each rule rewrites every non-overlapping
//! match in the text before the next rule runs, and every rewrite is
//! recorded as a [`Suggestion`].

use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// `if (x == true)` to `if (x)`
pub const RULE_ID_IF_TRUE: &str = "CT-S001";
/// `if (x == false)` to `if (!x)`
pub const RULE_ID_IF_FALSE: &str = "CT-S002";
/// `while (x == true)` to `while (x)`
pub const RULE_ID_WHILE_TRUE: &str = "CT-S003";
/// `while (x == false)` to `while (!x)`
pub const RULE_ID_WHILE_FALSE: &str = "CT-S004";

/// A textual rewrite rule.
#[derive(Debug, Clone, Copy)]
pub struct SimplifyRule {
    /// Stable rule identifier.
    pub id: &'static str,
    /// Pattern with the identifier in capture group 1.
    pub pattern: &'static str,
    /// Replacement, `$1` stands for the identifier.
    pub replacement: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// Rules in application order.
pub const RULES: &[SimplifyRule] = &[
    SimplifyRule {
        id: RULE_ID_IF_TRUE,
        pattern: r"\bif\s*\(\s*(\w+)\s*==\s*true\s*\)",
        replacement: "if ($1)",
        description: "Simplify `if (x == true)` to `if (x)`",
    },
    SimplifyRule {
        id: RULE_ID_IF_FALSE,
        pattern: r"\bif\s*\(\s*(\w+)\s*==\s*false\s*\)",
        replacement: "if (!$1)",
        description: "Simplify `if (x == false)` to `if (!x)`",
    },
    SimplifyRule {
        id: RULE_ID_WHILE_TRUE,
        pattern: r"\bwhile\s*\(\s*(\w+)\s*==\s*true\s*\)",
        replacement: "while ($1)",
        description: "Simplify `while (x == true)` to `while (x)`",
    },
    SimplifyRule {
        id: RULE_ID_WHILE_FALSE,
        pattern: r"\bwhile\s*\(\s*(\w+)\s*==\s*false\s*\)",
        replacement: "while (!$1)",
        description: "Simplify `while (x == false)` to `while (!x)`",
    },
];

/// A rewrite that was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Exact text that matched, before rewriting.
    pub matched: String,
    /// Identifier of the rule that fired.
    pub rule_id: &'static str,
    /// Rule description.
    pub description: &'static str,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at: \"{}\"", self.description, self.matched)
    }
}

fn compiled_rules() -> &'static [(SimplifyRule, Regex)] {
    static COMPILED: OnceLock<Vec<(SimplifyRule, Regex)>> = OnceLock::new();
    #[allow(clippy::expect_used)]
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|rule| {
                let re = Regex::new(rule.pattern).expect("Invalid simplification regex pattern");
                (*rule, re)
            })
            .collect()
    })
}

/// Applies every rule to `text`, returning the rewritten text and the
/// suggestions in the order they were applied.
pub fn simplify(text: &str) -> (String, Vec<Suggestion>) {
    let mut suggestions = Vec::new();
    let mut current = text.to_owned();

    for (rule, re) in compiled_rules() {
        let rewritten = re.replace_all(&current, |caps: &Captures| {
            suggestions.push(Suggestion {
                matched: caps[0].to_owned(),
                rule_id: rule.id,
                description: rule.description,
            });
            rule.replacement.replacen("$1", &caps[1], 1)
        });
        current = rewritten.into_owned();
    }

    (current, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_true() {
        let (out, suggestions) = simplify("if (flag == true) { }");
        assert_eq!(out, "if (flag) { }");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].matched, "if (flag == true)");
        assert_eq!(suggestions[0].rule_id, RULE_ID_IF_TRUE);
    }

    #[test]
    fn test_all_four_forms() {
        let code = "if (a == true)\nif (b == false)\nwhile (c == true)\nwhile ( d==false )";
        let (out, suggestions) = simplify(code);
        assert_eq!(out, "if (a)\nif (!b)\nwhile (c)\nwhile (!d)");
        let ids: Vec<&str> = suggestions.iter().map(|s| s.rule_id).collect();
        assert_eq!(
            ids,
            vec![
                RULE_ID_IF_TRUE,
                RULE_ID_IF_FALSE,
                RULE_ID_WHILE_TRUE,
                RULE_ID_WHILE_FALSE
            ]
        );
        assert_eq!(suggestions[3].matched, "while ( d==false )");
    }

    #[test]
    fn test_global_matching_without_dedup() {
        let (out, suggestions) = simplify("if (x == true) a();\nif (x == true) b();");
        assert_eq!(out, "if (x) a();\nif (x) b();");
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_non_identifier_operands_are_left_alone() {
        let code = "if (a.b == true) {}\nif (f() == false) {}\nelif (x == true)";
        let (out, suggestions) = simplify(code);
        assert_eq!(out, code);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_keyword_boundary() {
        let (out, suggestions) = simplify("notif (x == true)");
        assert_eq!(out, "notif (x == true)");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_suggestion_display() {
        let (_, suggestions) = simplify("while (running == false)");
        assert_eq!(
            suggestions[0].to_string(),
            "Simplify `while (x == false)` to `while (!x)` at: \"while (running == false)\""
        );
    }
}
