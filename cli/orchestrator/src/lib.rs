#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the wirecode CLI.

use std::path::PathBuf;

use config::{Config, ConfigError};
use logging::{LogOptions, LoggingError};
use pipeline::{PipelineError, PipelineOptions};
use thiserror::Error;
use types::Lang;

/// Errors that end a CLI invocation with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] LoggingError),
    /// The run was aborted.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    /// The run completed but some services failed.
    #[error("{0} service(s) failed; see the log for details")]
    Failures(usize),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Flags that may override the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--input`
    pub input: Option<PathBuf>,
    /// `--output`
    pub output: Option<PathBuf>,
    /// `--lang`, repeatable
    pub langs: Vec<Lang>,
    /// `--dry-run`
    pub dry_run: bool,
}

/// Combine configuration and flags into pipeline options; flags win.
pub fn pipeline_options(config: &Config, overrides: Overrides) -> Result<PipelineOptions> {
    let input = overrides.input.unwrap_or_else(|| config.declarations.input_path.clone());
    let output = overrides.output.unwrap_or_else(|| config.codegen.output_dir.clone());
    let langs =
        if overrides.langs.is_empty() { config.codegen.languages.clone() } else { overrides.langs };

    Ok(PipelineOptions::builder()
        .input(input)
        .output_dir(output)
        .languages(langs)
        .dry_run(overrides.dry_run)
        .build()?)
}

/// Logging settings from configuration; `verbose` raises the level to debug.
pub fn log_options(config: &Config, verbose: bool) -> LogOptions {
    LogOptions {
        level: config.logging.level.clone(),
        verbose,
        json: config.logging.json,
        file: config.logging.file.clone(),
    }
}

/// One line per supported language: tag, display name, host marker.
pub fn describe_langs() -> Vec<String> {
    Lang::ALL
        .iter()
        .map(|lang| {
            let host = if lang.is_host() { " (host)" } else { "" };
            format!("{:<8}{}{}", lang.as_str(), lang.display_name(), host)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.declarations.input_path = PathBuf::from("from-config.json");
        config.codegen.output_dir = PathBuf::from("config-out");
        config.codegen.languages = vec![Lang::CSharp, Lang::Go];
        config
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let options = pipeline_options(&config(), Overrides::default()).expect("valid options");
        assert_eq!(options.input(), Path::new("from-config.json"));
        assert_eq!(options.output_dir(), Path::new("config-out"));
        assert_eq!(options.languages(), &[Lang::CSharp, Lang::Go]);
        assert!(!options.dry_run());
    }

    #[test]
    fn test_flags_override_config() {
        let overrides = Overrides {
            input: Some(PathBuf::from("flag.json")),
            output: Some(PathBuf::from("flag-out")),
            langs: vec![Lang::Python],
            dry_run: true,
        };
        let options = pipeline_options(&config(), overrides).expect("valid options");
        assert_eq!(options.input(), Path::new("flag.json"));
        assert_eq!(options.output_dir(), Path::new("flag-out"));
        assert_eq!(options.languages(), &[Lang::Python]);
        assert!(options.dry_run());
    }

    #[test]
    fn test_verbose_log_options() {
        let options = log_options(&config(), true);
        assert!(options.verbose);
        assert_eq!(options.level, "info");
    }

    #[test]
    fn test_describe_langs_marks_host() {
        let lines = describe_langs();
        assert_eq!(lines.len(), Lang::ALL.len());
        assert_eq!(lines[0], "java    Java (host)");
        assert!(lines.iter().any(|l| l == "csharp  C#"));
    }
}
