//! Per-language message-type renderers.
//!
//! Every renderer produces one file per non-empty model, listing the
//! operations in declaration order with their merged codes.

mod cpp;
mod csharp;
mod go;
mod java;
mod python;
mod typescript;

use model::MessageTypeModel;
use types::Lang;

use crate::{CodeGenerator, CodegenError, Result};

/// First line of every generated file, without comment markers.
pub(crate) const GENERATED_BANNER: &str = "Generated by wirecode. Do not edit.";

/// Emits the message-type enum (or constant table) for one target language.
#[derive(Debug, Clone, Copy)]
pub struct MessageTypeEnumGenerator {
    lang: Lang,
}

impl MessageTypeEnumGenerator {
    /// Create a generator for `lang`.
    pub fn new(lang: Lang) -> Self { Self { lang } }

    /// Language this generator emits.
    pub fn lang(&self) -> Lang { self.lang }

    /// Path of the file emitted for `model`, relative to the language's output root.
    pub fn relative_path(&self, model: &MessageTypeModel) -> String {
        match self.lang {
            Lang::Java => java::relative_path(model),
            Lang::Cpp => cpp::relative_path(model),
            Lang::CSharp => csharp::relative_path(model),
            Lang::Python => python::relative_path(model),
            Lang::TypeScript => typescript::relative_path(model),
            Lang::Go => go::relative_path(model),
        }
    }

    /// Render the source for a single model.
    pub fn render(&self, model: &MessageTypeModel) -> String {
        match self.lang {
            Lang::Java => java::render(model),
            Lang::Cpp => cpp::render(model),
            Lang::CSharp => csharp::render(model),
            Lang::Python => python::render(model),
            Lang::TypeScript => typescript::render(model),
            Lang::Go => go::render(model),
        }
    }
}

impl CodeGenerator for MessageTypeEnumGenerator {
    fn generate(&self, models: &[MessageTypeModel]) -> Vec<(String, String)> {
        models
            .iter()
            .filter(|m| m.lang() == self.lang && !m.is_empty())
            .map(|m| (self.relative_path(m), self.render(m)))
            .collect()
    }

    fn validate(&self, models: &[MessageTypeModel]) -> Result<()> {
        match models.iter().find(|m| m.lang() != self.lang) {
            Some(m) => Err(CodegenError::LangMismatch {
                generator: self.lang,
                lang: m.lang(),
                class: m.class_name().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Doc sentence shared by all renderers.
pub(crate) fn summary(model: &MessageTypeModel) -> String {
    format!("Message types of the {} service.", model.name())
}
