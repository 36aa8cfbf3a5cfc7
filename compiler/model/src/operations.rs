//! Operation entries of a message-type model.

use ir::ServiceDeclaration;
use serde::Serialize;
use tracing::debug;

use crate::ids::{merge_ids, MessageCode};
use crate::{ModelError, Result};

/// One routable operation: its name and merged message code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationEntry {
    name: String,
    #[serde(rename = "id")]
    code: MessageCode,
}

impl OperationEntry {
    /// Create an entry from an already merged code.
    pub fn new(name: impl Into<String>, code: MessageCode) -> Self {
        Self { name: name.into(), code }
    }

    /// Operation name as declared.
    pub fn name(&self) -> &str { &self.name }

    /// Merged message code.
    pub fn code(&self) -> MessageCode { self.code }

    /// Merged message code rendered as hex, e.g. `0x10001`.
    pub fn id(&self) -> String { self.code.to_hex() }
}

/// Build the entries for every request operation that carries an id.
///
/// Declaration order is preserved. Non-request declarations and requests
/// without an id are skipped. An id that cannot be merged fails the whole
/// service.
pub fn build_operation_entries(service: &ServiceDeclaration) -> Result<Vec<OperationEntry>> {
    let mut entries = Vec::with_capacity(service.operations.len());

    for op in &service.operations {
        if !op.is_request() {
            continue;
        }
        let Some(local_id) = op.id else {
            debug!(service = %service.name, operation = %op.name, "request has no id, skipping");
            continue;
        };

        let code = merge_ids(service.id, local_id).map_err(|source| ModelError::IdOutOfRange {
            service: service.name.clone(),
            operation: op.name.clone(),
            source,
        })?;
        entries.push(OperationEntry::new(op.name.clone(), code));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use ir::OperationDeclaration;

    use super::*;
    use crate::IdRangeError;

    #[test]
    fn test_entries_follow_declaration_order() {
        let service = ServiceDeclaration::new("Ordered", 0x4)
            .with_operation(OperationDeclaration::request("c", 3))
            .with_operation(OperationDeclaration::request("a", 1))
            .with_operation(OperationDeclaration::request("b", 2));

        let entries = build_operation_entries(&service).expect("ids in range");
        let pairs: Vec<(&str, String)> = entries.iter().map(|e| (e.name(), e.id())).collect();
        assert_eq!(
            pairs,
            vec![
                ("c", "0x40003".to_string()),
                ("a", "0x40001".to_string()),
                ("b", "0x40002".to_string())
            ]
        );
    }

    #[test]
    fn test_skips_events_and_unrouted_requests() {
        let service = ServiceDeclaration::new("Mixed", 0x7)
            .with_operation(OperationDeclaration::event("changed", Some(1)))
            .with_operation(OperationDeclaration::request_without_id("local"))
            .with_operation(OperationDeclaration::request("get", 2));

        let entries = build_operation_entries(&service).expect("ids in range");
        assert_eq!(entries, vec![OperationEntry::new("get", merge_ids(0x7, 2).expect("in range"))]);
    }

    #[test]
    fn test_event_with_oversized_id_is_ignored() {
        let service = ServiceDeclaration::new("Events", 0x7)
            .with_operation(OperationDeclaration::event("huge", Some(0x1_0000)));
        assert_eq!(build_operation_entries(&service), Ok(vec![]));
    }

    #[test]
    fn test_oversized_operation_id_fails_service() {
        let service = ServiceDeclaration::new("Wide", 0x2)
            .with_operation(OperationDeclaration::request("ok", 1))
            .with_operation(OperationDeclaration::request("tooBig", 0x1_0000));

        assert_eq!(
            build_operation_entries(&service),
            Err(ModelError::IdOutOfRange {
                service: "Wide".to_string(),
                operation: "tooBig".to_string(),
                source: IdRangeError::OperationId(0x1_0000),
            })
        );
    }

    #[test]
    fn test_entry_serializes_hex_id() {
        let entry = OperationEntry::new("await", merge_ids(1, 2).expect("in range"));
        let json = serde_json::to_string(&entry).expect("serialize entry");
        assert_eq!(json, r#"{"name":"await","id":"0x10002"}"#);
    }
}
