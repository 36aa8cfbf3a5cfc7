//! Options for a generation run.

use std::path::{Path, PathBuf};

use types::Lang;

use crate::PipelineError;

/// Everything a run needs to know besides the declarations themselves.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    input: PathBuf,
    output_dir: PathBuf,
    languages: Vec<Lang>,
    dry_run: bool,
}

impl PipelineOptions {
    /// Create a new builder for PipelineOptions
    pub fn builder() -> PipelineOptionsBuilder { PipelineOptionsBuilder::default() }

    /// Path of the JSON declaration file
    pub fn input(&self) -> &Path { &self.input }

    /// Root output directory; each language writes under `<output_dir>/<tag>/`
    pub fn output_dir(&self) -> &Path { &self.output_dir }

    /// Target languages, deduplicated, in request order
    pub fn languages(&self) -> &[Lang] { &self.languages }

    /// When set, nothing is written
    pub fn dry_run(&self) -> bool { self.dry_run }

    /// Output directory for one language.
    pub fn lang_dir(&self, lang: Lang) -> PathBuf { self.output_dir.join(lang.as_str()) }
}

/// Builder for PipelineOptions
#[derive(Debug, Default)]
pub struct PipelineOptionsBuilder {
    input: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    languages: Vec<Lang>,
    dry_run: bool,
}

impl PipelineOptionsBuilder {
    /// Set the declaration file
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Add a target language
    pub fn language(mut self, lang: Lang) -> Self {
        self.languages.push(lang);
        self
    }

    /// Add several target languages
    pub fn languages(mut self, langs: impl IntoIterator<Item = Lang>) -> Self {
        self.languages.extend(langs);
        self
    }

    /// Build models and report without writing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build the PipelineOptions
    ///
    /// The output directory is only required when files will be written.
    /// Without any language the host language is targeted.
    pub fn build(self) -> Result<PipelineOptions, PipelineError> {
        let input =
            self.input.ok_or_else(|| PipelineError::Message("input is required".to_string()))?;
        let output_dir = match self.output_dir {
            Some(dir) => dir,
            None if self.dry_run => PathBuf::new(),
            None => return Err(PipelineError::Message("output_dir is required".to_string())),
        };

        let mut languages = Vec::with_capacity(self.languages.len());
        for lang in self.languages {
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }
        if languages.is_empty() {
            languages.push(Lang::host());
        }

        Ok(PipelineOptions { input, output_dir, languages, dry_run: self.dry_run })
    }
}
