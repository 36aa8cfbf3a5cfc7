#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a declaration file into message-type
//! sources for every requested language.
//!
//! ## Module Organization
//!
//! - `options` - What to read, where to write, which languages (`PipelineOptions`)
//! - `orchestration` - Main pipeline entry points (`run`, `run_with_source`, `check`)
//! - `report` - Outcome of a run (`GenerationReport`, `Failure`)

use analysis::{CollisionError, PhaseError};
use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that stop a generation run as a whole.
///
/// Problems confined to one service are not errors at this level; they are
/// recorded in the [`GenerationReport`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// The declaration source could not be read at all.
    #[error("Failed to load declarations from {source_name}: {error}")]
    Declarations {
        /// Description of the declaration source
        source_name: String,
        /// Underlying read error
        #[source]
        error: ir::DeclarationError,
    },
    /// Merged message codes collide; nothing was written.
    #[error(transparent)]
    Collision(#[from] CollisionError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// I/O error while creating or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<PhaseError> for PipelineError {
    fn from(err: PhaseError) -> Self {
        match err {
            PhaseError::Collision(collision) => PipelineError::Collision(collision),
        }
    }
}

pub mod options;
pub mod orchestration;
pub mod report;

pub use options::{PipelineOptions, PipelineOptionsBuilder};
pub use orchestration::{check, run, run_with_source};
pub use report::{Failure, GenerationReport};
