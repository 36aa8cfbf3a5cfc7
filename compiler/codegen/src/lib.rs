#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Source emission for message-type models.
//!
//! This crate turns [`MessageTypeModel`]s into source files, one renderer per
//! target language. It only renders and writes; deciding which models exist
//! and whether they are valid happens upstream.

pub mod generators;

use std::fs;
use std::path::{Path, PathBuf};

use model::MessageTypeModel;
use thiserror::Error;
use types::Lang;

pub use generators::MessageTypeEnumGenerator;

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Underlying I/O error while writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A generator was handed a model built for another language.
    #[error("{generator} generator cannot emit `{class}` built for {lang}")]
    LangMismatch {
        /// Language of the generator
        generator: Lang,
        /// Language of the offending model
        lang: Lang,
        /// Class name of the offending model
        class: String,
    },
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Defines the core interface for generating source files from message-type
/// models. Implementors produce a set of `(relative path, source)` pairs and
/// may optionally perform pre-generation validation.
pub trait CodeGenerator {
    /// Generate source files for the provided models. Empty models produce
    /// no file.
    fn generate(&self, models: &[MessageTypeModel]) -> Vec<(String, String)>;

    /// Optional validation step before generation (default is no-op).
    fn validate(&self, _models: &[MessageTypeModel]) -> Result<()> { Ok(()) }
}

/// Sub-crate: **`utils`**
///
/// Identifier case conversion shared by the renderers.
pub mod utils;

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<String> = src.lines().map(|l| l.trim_end().to_string()).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Persist generated source files under `out_dir`, creating any necessary
/// subdirectories. Returns the paths written, in input order.
pub fn write_generated<P: AsRef<Path>>(
    out_dir: P,
    files: &[(String, String)],
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(&out_dir)?;
    let mut written = Vec::with_capacity(files.len());
    for (name, src) in files {
        let path = out_dir.as_ref().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cleaned = clean_generated_source(src);
        fs::write(&path, cleaned.as_bytes())?;
        tracing::debug!(path = %path.display(), "wrote generated source");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_generated_source() {
        assert_eq!(clean_generated_source("a  \nb\t\n\n\n"), "a\nb\n");
        assert_eq!(clean_generated_source("\n\n"), "");
        assert_eq!(clean_generated_source("x"), "x\n");
    }

    #[test]
    fn test_write_generated_creates_directories() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let files = vec![
            ("com/example/A.java".to_string(), "class A {}   \n\n".to_string()),
            ("B.cs".to_string(), "enum B {}".to_string()),
        ];

        let written = write_generated(dir.path(), &files).expect("write should succeed");

        assert_eq!(written, vec![dir.path().join("com/example/A.java"), dir.path().join("B.cs")]);
        let java = fs::read_to_string(&written[0]).expect("Failed to read A.java");
        assert_eq!(java, "class A {}\n");
        let cs = fs::read_to_string(&written[1]).expect("Failed to read B.cs");
        assert_eq!(cs, "enum B {}\n");
    }
}
