#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Shared vocabulary for the Wirecode compiler.
//!
//! This crate defines the target-language tags that every other crate in the
//! workspace keys its behaviour on, plus the handful of process-wide constants
//! that must not drift from one service to the next.

/// Type-safe target language tags.
///
/// This module provides the `Lang` enum that identifies each language a
/// message-type model can be emitted for, together with the per-language
/// metadata (file extension, display name, host flag) the emitters rely on.
pub mod lang;

/// Re-export the `Lang` enum for convenience.
pub use lang::{Lang, UnknownLang};

/// Namespace stamped into every model built for the host language.
///
/// Services cannot override this; the host codec layout is controlled here.
pub const HOST_NAMESPACE: &str = "com.hazelcast.client.impl.protocol.codec";

/// Suffix appended to a service's short name to form its generated class name.
pub const CLASS_NAME_SUFFIX: &str = "MessageType";
