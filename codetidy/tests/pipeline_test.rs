//! Behavioural tests for the tidy pipeline as a whole.
#![allow(clippy::unwrap_used)]

use codetidy::canonicalize::canonicalize;
use codetidy::document::SourceDocument;
use codetidy::language::LanguageKind;
use codetidy::pipeline::{process, run, PipelineConfig, TidyOptions};
use codetidy::reindent::reindent;
use codetidy::scrub::ScrubberKind;
use codetidy::simplify::RULE_ID_IF_TRUE;
use std::fs;
use tempfile::tempdir;

const GREETER: &str = "int main() {\n  // greet\n  printf(\"hi\");\n  if (done == true) { return 0; }\n}";

fn tidy(text: &str, language: LanguageKind) -> codetidy::pipeline::Processed {
    let doc = SourceDocument::new("sample", language, text);
    process(&doc, &TidyOptions::default())
}

#[test]
fn test_greeter_end_to_end() {
    let processed = tidy(GREETER, LanguageKind::CFamily);
    let report = &processed.report;

    assert!(!processed.output.contains("greet"));
    assert!(processed.output.contains("if (done) {"));
    assert!(processed.output.contains("\n    printf(\"hi\");"));
    assert_eq!(report.single_line_comments, 1);
    assert_eq!(report.block_comments, 0);
    assert_eq!(report.suggestions.len(), 1);
    assert_eq!(report.suggestions[0].matched, "if (done == true)");
    assert_eq!(report.suggestions[0].rule_id, RULE_ID_IF_TRUE);
    for line in processed.output.lines() {
        assert_eq!(line, line.trim_end());
        assert!(!line.trim().is_empty());
    }
}

#[test]
fn test_rerun_on_clean_output_is_stable() {
    for scrubber in [ScrubberKind::Textual, ScrubberKind::LiteralAware] {
        let options = TidyOptions {
            scrubber,
            ..TidyOptions::default()
        };
        let first = process(
            &SourceDocument::new("a.c", LanguageKind::CFamily, GREETER),
            &options,
        );
        let second = process(
            &SourceDocument::new("a.c", LanguageKind::CFamily, first.output.clone()),
            &options,
        );
        assert_eq!(second.report.single_line_comments, 0);
        assert_eq!(second.report.block_comments, 0);
        assert_eq!(second.report.statements, first.report.statements);
        assert_eq!(second.output, first.output);
    }
}

#[test]
fn test_comment_counts_match_input() {
    let source = "// one\nint a = 1; /* two */\n/* three\n   spans */ int b = a;\n// four\nreturn b;";
    for scrubber in [ScrubberKind::Textual, ScrubberKind::LiteralAware] {
        let options = TidyOptions {
            scrubber,
            ..TidyOptions::default()
        };
        let report = process(
            &SourceDocument::new("c.c", LanguageKind::CFamily, source),
            &options,
        )
        .report;
        assert_eq!(report.single_line_comments, 2, "{scrubber}");
        assert_eq!(report.block_comments, 2, "{scrubber}");
    }
}

#[test]
fn test_statements_never_fewer_than_lines() {
    let inputs = [
        "int a = 1; int b = 2;\nreturn a + b;",
        "x = 1\n\n   \ny = 2; z = 3",
        "for (int i = 0; i < n; i++) {\nsum += i;\n}",
        ";;;\n;",
    ];
    for input in inputs {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let statements = canonicalize(&lines);
        assert!(statements.len() >= lines.len(), "{input:?}");
    }
}

#[test]
fn test_indentation_bounded_by_nesting() {
    let inputs = [
        "}\n}\nint x;",
        "a {\nb {\nc {\nd;\n}\n}\n}",
        "} else {\nx;\n}",
        "a {\nb {\n}}}}}\nc;",
    ];
    for input in inputs {
        let lines: Vec<&str> = input.lines().collect();
        let statements = canonicalize(&lines);
        let openers = statements.iter().filter(|s| s.ends_with('{')).count();
        let result = reindent(&statements, LanguageKind::Java, 4);

        assert!(result.max_depth <= openers, "{input:?}");
        for line in result.text.lines() {
            let indent = line.len() - line.trim_start().len();
            assert_eq!(indent % 4, 0);
            assert!(indent / 4 <= result.max_depth, "{input:?}");
        }
    }
}

#[test]
fn test_if_true_simplified_once() {
    let processed = tidy("if (flag == true) { }", LanguageKind::CFamily);
    assert!(processed.output.contains("if (flag) { }"));
    assert_eq!(processed.report.suggestions.len(), 1);
    assert!(processed.report.suggestions[0]
        .to_string()
        .contains("if (flag == true)"));
}

#[test]
fn test_unused_variable_on_clean_sample() {
    let report = tidy("int x = 5; int y = 10; return y;", LanguageKind::CFamily).report;
    assert_eq!(report.unused_variables, vec!["x"]);
}

#[test]
fn test_unused_include_conservatism() {
    let report = tidy(
        "#include <stdio.h>\n#include <vector>\nint main() {\nprintf(\"hi\");\n}",
        LanguageKind::CFamily,
    )
    .report;
    assert_eq!(report.unused_includes, vec!["vector"]);
}

#[test]
fn test_python_docstrings_and_comments() {
    let source = "\"\"\"Module doc.\"\"\"\nimport os  # needed\n'''\nmore\n'''\nprint(os.name)";
    let processed = tidy(source, LanguageKind::Python);
    assert_eq!(processed.output, "import os\nprint(os.name)");
    assert_eq!(processed.report.single_line_comments, 1);
    assert_eq!(processed.report.block_comments, 2);
}

#[test]
fn test_run_writes_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("greeter.c");
    fs::write(&input, GREETER).unwrap();

    let report = run(&PipelineConfig::new(&input)).unwrap();
    let written = fs::read_to_string(dir.path().join("greeter.tidy.c")).unwrap();
    assert!(written.contains("if (done)"));
    assert!(report.output_file.unwrap().ends_with("greeter.tidy.c"));
}

#[test]
fn test_unsupported_extension_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("notes.rb");
    fs::write(&input, "puts 1").unwrap();

    let err = run(&PipelineConfig::new(&input)).unwrap_err();
    assert!(err.is_unsupported());
    assert!(err.to_string().contains("Unsupported file format"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
