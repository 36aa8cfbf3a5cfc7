//! The per-(service, language) message-type model.

use ir::ServiceDeclaration;
use serde::Serialize;
use types::Lang;

use crate::naming::derive_class_name;
use crate::namespace::resolve_namespace;
use crate::operations::{build_operation_entries, OperationEntry};
use crate::Result;

/// Everything an emitter needs to write one message-type source file.
///
/// Built once per (service, language) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageTypeModel {
    lang: Lang,
    name: String,
    class_name: String,
    namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<String>,
    entries: Vec<OperationEntry>,
}

impl MessageTypeModel {
    /// Build the model for `service` targeting `lang`.
    pub fn build(service: &ServiceDeclaration, lang: Lang) -> Result<Self> {
        let namespace = resolve_namespace(lang, service)?;
        let entries = build_operation_entries(service)?;

        Ok(Self {
            lang,
            name: service.name.clone(),
            class_name: derive_class_name(&service.name),
            namespace,
            since: service.since.clone(),
            entries,
        })
    }

    /// Target language.
    pub fn lang(&self) -> Lang { self.lang }

    /// Service short name.
    pub fn name(&self) -> &str { &self.name }

    /// Generated class name.
    pub fn class_name(&self) -> &str { &self.class_name }

    /// Namespace / package the class is emitted under.
    pub fn namespace(&self) -> &str { &self.namespace }

    /// Protocol version that introduced the service, if declared.
    pub fn since(&self) -> Option<&str> { self.since.as_deref() }

    /// Operation entries in declaration order.
    pub fn entries(&self) -> &[OperationEntry] { &self.entries }

    /// Number of routable operations.
    pub fn len(&self) -> usize { self.entries.len() }

    /// True when no operation qualified; such a model must not be emitted.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
