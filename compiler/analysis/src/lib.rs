#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wirecode declaration analysis
//!
//! Checks that run over the whole declaration set before any model is
//! emitted: structural validation (warnings) and the message-code collision
//! check, which is the only failure that stops an entire generation run.

use std::collections::HashMap;

use ir::DeclarationSet;
use thiserror::Error;

pub mod collisions;
pub mod validator;

pub use collisions::{detect_collisions, Collision, CollisionChecker, CollisionError};
pub use validator::DeclarationValidator;

/// Shared state for analysis phases.
#[derive(Debug)]
pub struct CompilerContext {
    /// Declarations that were read successfully
    pub declarations: DeclarationSet,
    /// Diagnostics collected so far
    pub diagnostics: CompilerDiagnostics,
}

impl CompilerContext {
    /// Create a context over `declarations` with empty diagnostics.
    pub fn new(declarations: DeclarationSet) -> Self {
        Self { declarations, diagnostics: CompilerDiagnostics::default() }
    }

    /// Add diagnostic warning
    pub fn add_warning(&mut self, warning: String) { self.diagnostics.warnings.push(warning); }

    /// Add diagnostic error
    pub fn add_error(&mut self, error: String) { self.diagnostics.errors.push(error); }

    /// Bump a named counter.
    pub fn record_stat(&mut self, key: &str, count: usize) {
        *self.diagnostics.stats.entry(key.to_string()).or_insert(0) += count;
    }
}

/// Compiler diagnostics
#[derive(Debug, Default, Clone)]
pub struct CompilerDiagnostics {
    /// Warnings generated
    pub warnings: Vec<String>,
    /// Errors generated
    pub errors: Vec<String>,
    /// Statistics
    pub stats: HashMap<String, usize>,
}

impl CompilerDiagnostics {
    /// True when no phase reported an error.
    pub fn is_clean(&self) -> bool { self.errors.is_empty() }
}

#[derive(Debug, Error)]
/// Errors produced by analysis phases.
pub enum PhaseError {
    /// Merged message codes collide across the declaration set.
    #[error(transparent)]
    Collision(#[from] CollisionError),
}

/// Result alias for phase execution.
pub type Result<T> = std::result::Result<T, PhaseError>;

/// Result of a compiler phase
/// Empty Ok indicates success; errors carry context.
pub type PhaseResult = Result<()>;

/// Trait for analysis phases run over the whole declaration set.
pub trait CompilerPhase {
    /// Name of the phase
    fn name(&self) -> &str;

    /// Description of what this phase does
    fn description(&self) -> &str;

    /// Execute this phase on the compiler context
    fn run(&self, ctx: &mut CompilerContext) -> PhaseResult;
}
