//! Read-only access to service declarations.
//!
//! Each service entry is decoded on its own so that one malformed service
//! does not take the rest of the file down with it.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::declarations::{DeclarationError, DeclarationSet, Result, ServiceDeclaration};

/// Outcome of reading a declaration source.
#[derive(Debug)]
pub struct LoadedDeclarations {
    /// Protocol version declared by the source (empty if absent)
    pub version: String,
    /// One entry per declared service, in source order
    pub services: Vec<Result<ServiceDeclaration>>,
}

impl LoadedDeclarations {
    /// Split into the successfully read set and the failures.
    pub fn into_parts(self) -> (DeclarationSet, Vec<DeclarationError>) {
        let mut valid = Vec::new();
        let mut failures = Vec::new();
        for entry in self.services {
            match entry {
                Ok(service) => valid.push(service),
                Err(e) => failures.push(e),
            }
        }
        (DeclarationSet::new_with_version(self.version, valid), failures)
    }
}

/// Narrow interface through which the compiler receives declarations.
pub trait DeclarationSource {
    /// Human-readable description of where declarations come from.
    fn describe(&self) -> String;

    /// Read every declared service.
    ///
    /// The outer error is fatal (nothing could be read); per-service failures
    /// are reported inside [`LoadedDeclarations::services`].
    fn load(&self) -> Result<LoadedDeclarations>;
}

/// Declarations stored in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    /// Path of the declaration file.
    pub fn path(&self) -> &Path { &self.path }
}

impl DeclarationSource for JsonFileSource {
    fn describe(&self) -> String { self.path.display().to_string() }

    fn load(&self) -> Result<LoadedDeclarations> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_declarations(&content)
    }
}

impl DeclarationSource for DeclarationSet {
    fn describe(&self) -> String {
        format!("in-memory declarations ({} services)", self.services().len())
    }

    fn load(&self) -> Result<LoadedDeclarations> {
        Ok(LoadedDeclarations {
            version: self.version().to_string(),
            services: self.services().iter().cloned().map(Ok).collect(),
        })
    }
}

#[derive(Deserialize)]
struct RawDeclarationFile {
    #[serde(default)]
    version: String,
    services: Vec<Value>,
}

/// Parse a JSON declaration document.
///
/// Fails only if the document is not JSON or lacks a `services` array.
pub fn parse_declarations(content: &str) -> Result<LoadedDeclarations> {
    let raw: RawDeclarationFile = serde_json::from_str(content)?;
    let services = raw
        .services
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let label = value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string();
            serde_json::from_value::<ServiceDeclaration>(value)
                .map_err(|source| DeclarationError::Malformed { index, label, source })
        })
        .collect();
    Ok(LoadedDeclarations { version: raw.version, services })
}
