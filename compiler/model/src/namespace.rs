//! Namespace resolution per target language.

use ir::ServiceDeclaration;
use types::{Lang, HOST_NAMESPACE};

use crate::{ModelError, Result};

/// Namespace (package) a service's model is emitted under for `lang`.
///
/// - Host language: always [`HOST_NAMESPACE`]; service overrides are ignored.
/// - Other languages: the per-language override, else the service's shared
///   `namespace`. Blank values count as absent. If neither is declared the
///   service fails for that language rather than falling back to the host
///   namespace.
pub fn resolve_namespace(lang: Lang, service: &ServiceDeclaration) -> Result<String> {
    if lang.is_host() {
        return Ok(HOST_NAMESPACE.to_string());
    }

    fn declared(ns: Option<&String>) -> Option<&str> {
        ns.map(|ns| ns.trim()).filter(|ns| !ns.is_empty())
    }

    declared(service.namespaces.get(&lang))
        .or_else(|| declared(service.namespace.as_ref()))
        .map(str::to_string)
        .ok_or_else(|| ModelError::MissingNamespace { service: service.name.clone(), lang })
}
