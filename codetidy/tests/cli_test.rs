use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_tidies_greeter() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("greeter.c");
    fs::write(
        &source,
        "int main() {\n  // greet\n  printf(\"hi\");\n  if (done == true) { return 0; }\n}",
    )?;

    let mut cmd = Command::cargo_bin("codetidy-bin")?;
    cmd.arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Simplifications Applied:"))
        .stdout(predicate::str::contains("if (done == true)"))
        .stdout(predicate::str::contains("Preview:"));

    let written = fs::read_to_string(temp.path().join("greeter.tidy.c"))?;
    assert!(written.starts_with("int main() {\n    printf(\"hi\");"));
    assert!(!written.contains("greet"));
    Ok(())
}

#[test]
fn test_cli_rejects_unsupported_extension() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("styles.css");
    fs::write(&source, "body { color: red; }")?;

    let mut cmd = Command::cargo_bin("codetidy-bin")?;
    cmd.arg(&source)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unsupported file format"));

    assert!(!temp.path().join("styles.tidy.css").exists());
    Ok(())
}

#[test]
fn test_cli_quiet_batch() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("one.java"), "class One { int n = 1; }")?;
    fs::write(temp.path().join("two.py"), "'''doc'''\nprint(2)")?;

    let mut cmd = Command::cargo_bin("codetidy-bin")?;
    cmd.arg(temp.path())
        .arg("--quiet")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("one.java"))
        .stdout(predicate::str::contains("two.py"))
        .stdout(predicate::str::contains("Processed 2 files"));

    assert!(!temp.path().join("one.tidy.java").exists());
    Ok(())
}

#[test]
fn test_cli_verbose_logs_to_stderr() -> Result<()> {
    let temp = TempDir::new()?;
    let source = temp.path().join("main.cpp");
    fs::write(&source, "int main() {\nreturn 0;\n}")?;

    let mut cmd = Command::cargo_bin("codetidy-bin")?;
    cmd.arg(&source)
        .arg("--verbose")
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("[VERBOSE] codetidy v"))
        .stderr(predicate::str::contains("max depth 1"));
    Ok(())
}
