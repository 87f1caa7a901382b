// ── Core error types ──
//
// Parse errors describe bad operator input and are returned to the caller
// untouched. Decode errors describe a stored record body that does not match
// its declared type; the printer contains them to a single report block.

use std::net::AddrParseError;
use std::num::ParseIntError;

use hickory_proto::error::ProtoError;
use hickory_proto::serialize::binary::DecodeError as WireDecodeError;
use thiserror::Error;

use crate::model::RecordType;
use crate::parser::Field;

/// Why a token array could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing required argument <{field}> at position {position}")]
    MissingArgument { field: Field, position: usize },

    #[error("invalid domain name for <{field}>: '{token}' ({reason})")]
    InvalidName {
        field: Field,
        token: String,
        reason: String,
    },

    #[error("invalid IP address for <{field}>: '{token}'")]
    InvalidAddress {
        field: Field,
        token: String,
        #[source]
        source: AddrParseError,
    },

    #[error("invalid number for <{field}>: '{token}' ({source})")]
    InvalidNumber {
        field: Field,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// The positional slot the error is about.
    pub fn field(&self) -> Field {
        match self {
            Self::MissingArgument { field, .. }
            | Self::InvalidName { field, .. }
            | Self::InvalidAddress { field, .. }
            | Self::InvalidNumber { field, .. } => *field,
        }
    }
}

/// Why a wire-format record body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The body does not follow its type's RDATA layout.
    #[error("{reason}")]
    Wire { reason: String },

    #[error("body is {len} bytes, limit is {}", u16::MAX)]
    Oversize { len: usize },

    #[error("invalid name: {reason}")]
    Name { reason: String },

    #[error("invalid owner name '{name}': {reason}")]
    OwnerName { name: String, reason: String },

    #[error("address must be {expected} bytes, got {actual}")]
    AddressLength { expected: usize, actual: usize },

    #[error("TXT record carries no character-strings")]
    EmptyText,
}

impl From<ProtoError> for DecodeError {
    fn from(err: ProtoError) -> Self {
        Self::Wire {
            reason: err.to_string(),
        }
    }
}

impl From<WireDecodeError> for DecodeError {
    fn from(err: WireDecodeError) -> Self {
        Self::Wire {
            reason: err.to_string(),
        }
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed {record_type} record body: {source}")]
    MalformedRecordBody {
        record_type: RecordType,
        #[source]
        source: DecodeError,
    },

    #[error("cannot encode {record_type} record body: {source}")]
    Encode {
        record_type: RecordType,
        #[source]
        source: ProtoError,
    },
}
