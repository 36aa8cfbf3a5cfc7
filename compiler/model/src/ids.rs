//! Merging a service id and an operation id into one message code.
//!
//! `code = (service_id << 16) | operation_id`. The layout is shared by every
//! codec implementation; changing it breaks wire compatibility.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of low bits reserved for the operation id.
pub const OPERATION_ID_BITS: u32 = 16;

/// Largest operation id that fits below [`OPERATION_ID_BITS`].
pub const MAX_OPERATION_ID: u32 = (1 << OPERATION_ID_BITS) - 1;

/// Largest service id that keeps the merged code within 32 bits.
pub const MAX_SERVICE_ID: u32 = u32::MAX >> OPERATION_ID_BITS;

/// An id that cannot be packed without losing bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdRangeError {
    /// Service id above [`MAX_SERVICE_ID`].
    #[error("service id {0:#x} exceeds 0xffff")]
    ServiceId(u32),
    /// Operation id above [`MAX_OPERATION_ID`].
    #[error("operation id {0:#x} does not fit in 16 bits")]
    OperationId(u32),
}

/// Merged message-type code routing one operation on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageCode(u32);

impl MessageCode {
    /// Raw numeric value.
    pub fn value(self) -> u32 { self.0 }

    /// Service half of the code.
    pub fn service_id(self) -> u32 { self.0 >> OPERATION_ID_BITS }

    /// Operation half of the code.
    pub fn operation_id(self) -> u32 { self.0 & MAX_OPERATION_ID }

    /// Hex rendering used in generated sources, e.g. `0x10001`.
    pub fn to_hex(self) -> String { add_hex_prefix(self.0) }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:#x}", self.0) }
}

impl Serialize for MessageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pack `service_id` and `operation_id` into one code.
///
/// Fails instead of truncating when either id is out of range.
pub fn merge_ids(service_id: u32, operation_id: u32) -> Result<MessageCode, IdRangeError> {
    if service_id > MAX_SERVICE_ID {
        return Err(IdRangeError::ServiceId(service_id));
    }
    if operation_id > MAX_OPERATION_ID {
        return Err(IdRangeError::OperationId(operation_id));
    }
    Ok(MessageCode((service_id << OPERATION_ID_BITS) | operation_id))
}

/// Render `value` as lowercase hexadecimal with a `0x` prefix.
pub fn add_hex_prefix(value: u32) -> String { format!("{:#x}", value) }
