#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Message-type model construction.
//!
//! Turns one [`ServiceDeclaration`](ir::ServiceDeclaration) into the
//! per-language model that emitters walk: a class name, a namespace, and the
//! ordered list of `(operation, merged code)` pairs. Every codec in every
//! language routes messages on these codes, so the merge rule in [`ids`] is
//! the one piece that must never change.

pub mod ids;
pub mod message_type;
pub mod naming;
pub mod namespace;
pub mod operations;

pub use ids::{add_hex_prefix, merge_ids, IdRangeError, MessageCode};
pub use message_type::MessageTypeModel;
pub use naming::{capitalize_first_letter, derive_class_name};
pub use namespace::resolve_namespace;
pub use operations::{build_operation_entries, OperationEntry};
use types::Lang;

/// Errors that abort model construction for one (service, language) pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A merged code could not be formed without truncation.
    #[error("service `{service}`, operation `{operation}`: {source}")]
    IdOutOfRange {
        /// Service short name
        service: String,
        /// Operation name
        operation: String,
        /// Which id overflowed
        source: IdRangeError,
    },
    /// A non-host language was requested but the service names no namespace for it.
    #[error("service `{service}` declares no namespace for {lang}")]
    MissingNamespace {
        /// Service short name
        service: String,
        /// Requested language
        lang: Lang,
    },
}

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
