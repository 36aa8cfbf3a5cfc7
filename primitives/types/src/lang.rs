//! Type-safe names for the languages a message-type model can target.
//!
//! To add a language: add a variant, a row in `LANG_METADATA`, and a renderer
//! in the codegen crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target language of a generated message-type model.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Java, the host language
    #[default]
    Java,
    /// C++
    Cpp,
    /// C#
    CSharp,
    /// Python
    #[serde(rename = "py")]
    Python,
    /// TypeScript (Node.js client)
    #[serde(rename = "ts")]
    TypeScript,
    /// Go
    Go,
}

/// Error returned when a language tag is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown language tag: {} (supported: {})", .0, Lang::tags().join(", "))]
pub struct UnknownLang(pub String);

/// Metadata for a language variant.
struct LangMetadata {
    as_str: &'static str,
    display_name: &'static str,
    file_extension: &'static str,
    is_host: bool,
}

impl LangMetadata {
    const fn new(
        as_str: &'static str,
        display_name: &'static str,
        file_extension: &'static str,
        is_host: bool,
    ) -> Self {
        Self { as_str, display_name, file_extension, is_host }
    }
}

const LANG_METADATA: [LangMetadata; 6] = [
    LangMetadata::new("java", "Java", "java", true),
    LangMetadata::new("cpp", "C++", "h", false),
    LangMetadata::new("csharp", "C#", "cs", false),
    LangMetadata::new("py", "Python", "py", false),
    LangMetadata::new("ts", "TypeScript", "ts", false),
    LangMetadata::new("go", "Go", "go", false),
];

impl Lang {
    /// Every supported language, host first.
    pub const ALL: [Lang; 6] =
        [Lang::Java, Lang::Cpp, Lang::CSharp, Lang::Python, Lang::TypeScript, Lang::Go];

    fn metadata(&self) -> &'static LangMetadata {
        let index = match self {
            Lang::Java => 0,
            Lang::Cpp => 1,
            Lang::CSharp => 2,
            Lang::Python => 3,
            Lang::TypeScript => 4,
            Lang::Go => 5,
        };
        &LANG_METADATA[index]
    }

    /// Get the tag used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str { self.metadata().as_str }

    /// Get the human-readable display name.
    pub fn display_name(&self) -> &'static str { self.metadata().display_name }

    /// Get the extension (without dot) of generated source files.
    pub fn file_extension(&self) -> &'static str { self.metadata().file_extension }

    /// Whether this is the host language, whose namespace is fixed.
    pub fn is_host(&self) -> bool { self.metadata().is_host }

    /// The host language.
    pub fn host() -> Lang { Lang::Java }

    /// All supported tags, in declaration order.
    pub fn tags() -> Vec<&'static str> { Self::ALL.iter().map(Lang::as_str).collect() }
}

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Lang::Java),
            "cpp" | "c++" => Ok(Lang::Cpp),
            "csharp" | "c#" | "cs" => Ok(Lang::CSharp),
            "py" | "python" => Ok(Lang::Python),
            "ts" | "typescript" | "node" => Ok(Lang::TypeScript),
            "go" | "golang" => Ok(Lang::Go),
            _ => Err(UnknownLang(s.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
