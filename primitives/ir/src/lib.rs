#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wirecode declaration IR
//!
//! This crate defines the language-neutral description of an RPC service that
//! the compiler consumes: a named service with a master id, and its ordered
//! operations with their local ids. Declarations are read through the
//! [`DeclarationSource`] trait so the compiler never depends on how they were
//! extracted.

pub mod declarations;
pub mod source;

pub use declarations::{
    DeclarationError, DeclarationSet, OperationDeclaration, OperationKind, ServiceDeclaration,
};
pub use source::{parse_declarations, DeclarationSource, JsonFileSource, LoadedDeclarations};
