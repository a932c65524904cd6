//! Path utilities for codetidy.
//!
//! This module consolidates all path-related logic for:
//! - Cross-platform path normalization for display
//! - Source file discovery with gitignore support

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use crate::language::LanguageKind;
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use codetidy::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\main.c")), "src/main.c");
/// assert_eq!(normalize_display_path(Path::new("./lib/util.py")), "lib/util.py");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| match exclude.strip_prefix('*') {
        Some(tail) if tail.starts_with('.') => name.ends_with(tail),
        _ => name == exclude,
    })
}

/// Whether `path` looks like a file this tool wrote (`stem.<suffix>.ext`).
#[must_use]
pub fn is_generated_output(path: &Path, suffix: &str) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| {
            stem.rsplit_once('.')
                .is_some_and(|(base, infix)| !base.is_empty() && infix == suffix)
        })
}

/// Collects supported source files under `root`.
///
/// A file root is returned as-is (even with an unsupported extension, so the
/// pipeline can report it). Directories are walked honouring `.gitignore`,
/// skipping excluded folders, unsupported extensions and previously
/// generated outputs.
#[must_use]
pub fn collect_source_files(
    root: &Path,
    exclude: &[String],
    output_suffix: &str,
    verbose: bool,
) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    if !root.is_dir() {
        return vec![root.to_path_buf()];
    }

    let mut all_excludes: Vec<String> = exclude.to_vec();
    all_excludes.extend(DEFAULT_EXCLUDE_FOLDERS().iter().map(|&s| s.to_owned()));
    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(false) // Don't skip hidden files (we handle that with defaults)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !is_excluded(name, &all_excludes))
        })
        .build();

    let mut files = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                if LanguageKind::from_path(path).is_some()
                    && !is_generated_output(path, output_suffix)
                {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                // Ignore walk errors silently unless verbose
                if verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_display_path() {
        assert_eq!(normalize_display_path(Path::new("./a/b.c")), "a/b.c");
        assert_eq!(normalize_display_path(Path::new("a\\b.c")), "a/b.c");
        assert_eq!(normalize_display_path(Path::new("plain.py")), "plain.py");
    }

    #[test]
    fn test_is_excluded() {
        let excludes = vec!["vendor".to_owned(), "*.egg-info".to_owned()];
        assert!(is_excluded("vendor", &excludes));
        assert!(is_excluded("pkg.egg-info", &excludes));
        assert!(!is_excluded("src", &excludes));
    }

    #[test]
    fn test_is_generated_output() {
        assert!(is_generated_output(Path::new("main.tidy.c"), "tidy"));
        assert!(!is_generated_output(Path::new("main.c"), "tidy"));
        assert!(!is_generated_output(Path::new(".tidy.c"), "tidy"));
        assert!(!is_generated_output(Path::new("main.tidy.c"), "out"));
    }

    #[test]
    fn test_collect_source_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/nested")).unwrap();
        fs::create_dir_all(root.join("build")).unwrap();
        fs::create_dir_all(root.join("vendor")).unwrap();
        fs::write(root.join("src/main.c"), "int main() {}").unwrap();
        fs::write(root.join("src/main.tidy.c"), "int main() {}").unwrap();
        fs::write(root.join("src/nested/App.java"), "class App {}").unwrap();
        fs::write(root.join("src/nested/tool.py"), "x = 1").unwrap();
        fs::write(root.join("src/README.md"), "# readme").unwrap();
        fs::write(root.join("build/gen.c"), "int g;").unwrap();
        fs::write(root.join("vendor/dep.c"), "int d;").unwrap();

        let files = collect_source_files(root, &["vendor".to_owned()], "tidy", false);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["src/main.c", "src/nested/App.java", "src/nested/tool.py"]);
    }

    #[test]
    fn test_collect_file_root_is_returned_as_is() {
        let files = collect_source_files(Path::new("notes.txt"), &[], "tidy", false);
        assert_eq!(files, vec![PathBuf::from("notes.txt")]);
    }
}
