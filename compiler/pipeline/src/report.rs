//! Outcome of a generation run.

use std::fmt;
use std::path::PathBuf;

use analysis::CompilerDiagnostics;
use model::ModelError;
use types::Lang;

/// A problem confined to one service (or one service and language).
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// A service entry in the declaration file could not be read.
    Declaration(String),
    /// A model could not be built for one language.
    Model {
        /// Service short name
        service: String,
        /// Language the model was built for
        lang: Lang,
        /// Why it failed
        error: ModelError,
    },
    /// A model would be written to a path an earlier service already uses.
    DuplicateOutput {
        /// Service short name
        service: String,
        /// Language the model was built for
        lang: Lang,
        /// Output path relative to the language directory
        path: String,
    },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Declaration(message) => write!(f, "{}", message),
            Failure::Model { lang, error, .. } => write!(f, "[{}] {}", lang, error),
            Failure::DuplicateOutput { service, lang, path } => {
                write!(f, "[{}] service `{}` would overwrite {}", lang, service, path)
            }
        }
    }
}

/// Summary of one pipeline run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Version string of the declaration file
    pub version: String,
    /// Non-empty models built
    pub models_generated: usize,
    /// Models with no qualifying operation; never emitted
    pub empty_skipped: usize,
    /// Files that were (or, on a dry run, would have been) emitted
    pub files_planned: Vec<PathBuf>,
    /// Files actually written
    pub files_written: Vec<PathBuf>,
    /// Service-scoped failures, in the order they were found
    pub failures: Vec<Failure>,
    /// Validator warnings
    pub warnings: Vec<String>,
    /// Diagnostics collected by the analysis phases
    pub diagnostics: CompilerDiagnostics,
}

impl GenerationReport {
    /// True if any service failed to load or build.
    pub fn has_failures(&self) -> bool { !self.failures.is_empty() }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} model(s) generated, {} empty skipped, {} file(s) written, {} failure(s), {} warning(s)",
            self.models_generated,
            self.empty_skipped,
            self.files_written.len(),
            self.failures.len(),
            self.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = Failure::Model {
            service: "Map".to_string(),
            lang: Lang::CSharp,
            error: ModelError::MissingNamespace { service: "Map".to_string(), lang: Lang::CSharp },
        };
        assert_eq!(failure.to_string(), "[csharp] service `Map` declares no namespace for csharp");

        let duplicate = Failure::DuplicateOutput {
            service: "Map".to_string(),
            lang: Lang::Go,
            path: "map_message_type.go".to_string(),
        };
        assert_eq!(duplicate.to_string(), "[go] service `Map` would overwrite map_message_type.go");
    }

    #[test]
    fn test_empty_report() {
        let report = GenerationReport::default();
        assert!(!report.has_failures());
        assert_eq!(
            report.summary(),
            "0 model(s) generated, 0 empty skipped, 0 file(s) written, 0 failure(s), 0 warning(s)"
        );
    }
}
