use crate::error::TidyError;
use crate::language::{LanguageChoice, LanguageKind};
use std::fs;
use std::path::{Path, PathBuf};

/// A source file read into memory together with its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    language: LanguageKind,
    text: String,
}

impl SourceDocument {
    /// Builds a document from text already in memory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, language: LanguageKind, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language,
            text: text.into(),
        }
    }

    /// Resolves the language for `path` and reads the file.
    ///
    /// The language is resolved first, so an unsupported extension never
    /// touches the filesystem.
    pub fn load(path: &Path, choice: LanguageChoice) -> Result<Self, TidyError> {
        let language = choice.resolve(path)?;
        let text = fs::read_to_string(path).map_err(|source| TidyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, language, text))
    }

    /// Path the document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Language family of the document.
    #[must_use]
    pub const fn language(&self) -> LanguageKind {
        self.language
    }

    /// Raw source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
