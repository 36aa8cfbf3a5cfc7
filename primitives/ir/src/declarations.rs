//! Service and operation declarations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use types::Lang;

/// Errors raised while reading declarations.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    /// The declaration file could not be read.
    #[error("Failed to read declarations: {0}")]
    Io(#[from] std::io::Error),
    /// The declaration file is not a JSON document with a `services` array.
    #[error("Failed to parse declarations: {0}")]
    Json(#[from] serde_json::Error),
    /// One service entry could not be turned into a [`ServiceDeclaration`].
    #[error("Service #{index} ({label}) is malformed: {source}")]
    Malformed {
        /// Position of the entry in the `services` array
        index: usize,
        /// Service name if it could be recovered, `<unnamed>` otherwise
        label: String,
        /// Underlying deserialization failure
        source: serde_json::Error,
    },
}

/// Result type for declaration reading.
pub type Result<T> = std::result::Result<T, DeclarationError>;

/// A complete set of service declarations, e.g. one protocol definition file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationSet {
    /// Protocol version the declarations belong to (e.g. "1.8")
    #[serde(default)]
    version: String,
    /// Declared services, in file order
    services: Vec<ServiceDeclaration>,
}

/// A remote service: a short name, a master id and its operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDeclaration {
    /// Short name (e.g. "CPCountDownLatch")
    pub name: String,
    /// Master id, unique per service across the protocol
    pub id: u32,
    /// Namespace used by every non-host language without a specific override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Per-language namespace overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub namespaces: BTreeMap<Lang, String>,
    /// Protocol version that introduced the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Operations in declaration order
    #[serde(default)]
    pub operations: Vec<OperationDeclaration>,
}

/// One operation declared on a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDeclaration {
    /// Operation name (e.g. "trySetCount")
    pub name: String,
    /// Declaration kind; only requests get a message type
    #[serde(default)]
    pub kind: OperationKind,
    /// Local id, unique within the owning service. `None` means the
    /// operation is declared but not routable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

/// Declaration kinds found on a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Client-invocable request
    #[default]
    Request,
    /// Server-pushed event
    Event,
    /// Response payload description
    Response,
}

impl DeclarationSet {
    /// Create a declaration set with no version tag.
    pub fn new(services: Vec<ServiceDeclaration>) -> Self {
        Self::new_with_version(String::new(), services)
    }

    /// Create a declaration set for a specific protocol version.
    pub fn new_with_version(version: String, services: Vec<ServiceDeclaration>) -> Self {
        Self { version, services }
    }

    /// Protocol version of this set.
    pub fn version(&self) -> &str { &self.version }

    /// Declared services in file order.
    pub fn services(&self) -> &[ServiceDeclaration] { &self.services }

    /// Total number of declared operations across all services.
    pub fn operation_count(&self) -> usize { self.services.iter().map(|s| s.operations.len()).sum() }
}

impl ServiceDeclaration {
    /// Create a service with no operations and no namespaces.
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            namespace: None,
            namespaces: BTreeMap::new(),
            since: None,
            operations: Vec::new(),
        }
    }

    /// Set the namespace shared by all non-host languages.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a namespace override for one language.
    pub fn with_override(mut self, lang: Lang, namespace: impl Into<String>) -> Self {
        self.namespaces.insert(lang, namespace.into());
        self
    }

    /// Append an operation.
    pub fn with_operation(mut self, operation: OperationDeclaration) -> Self {
        self.operations.push(operation);
        self
    }

    /// Set the version that introduced the service.
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }
}

impl OperationDeclaration {
    /// A request operation with a local id.
    pub fn request(name: impl Into<String>, id: u32) -> Self {
        Self { name: name.into(), kind: OperationKind::Request, id: Some(id) }
    }

    /// A request operation declared without an id.
    pub fn request_without_id(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: OperationKind::Request, id: None }
    }

    /// An event declaration.
    pub fn event(name: impl Into<String>, id: Option<u32>) -> Self {
        Self { name: name.into(), kind: OperationKind::Event, id }
    }

    /// Whether this declaration is a request.
    pub fn is_request(&self) -> bool { self.kind == OperationKind::Request }
}
