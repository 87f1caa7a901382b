// ── Stored record descriptors ──
//
// The opaque shape records take in the config service: owner name, numeric
// type and class, TTL, and the wire-format record body.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric DNS record type codes known to the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Ns,
    Cname,
    Soa,
    Mx,
    Txt,
    Aaaa,
    Srv,
    Cert,
    Unknown(u16),
}

impl RecordType {
    /// Report label for this type; any code without a decoder is "Unknown".
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Cname => "CNAME",
            Self::Soa => "SOA",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Aaaa => "AAAA",
            Self::Srv => "SRV",
            Self::Cert => "CERT",
            Self::Unknown(_) => "Unknown",
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::A => 1,
            Self::Ns => 2,
            Self::Cname => 5,
            Self::Soa => 6,
            Self::Mx => 15,
            Self::Txt => 16,
            Self::Aaaa => 28,
            Self::Srv => 33,
            Self::Cert => 37,
            Self::Unknown(code) => code,
        }
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        match code {
            1 => Self::A,
            2 => Self::Ns,
            5 => Self::Cname,
            6 => Self::Soa,
            15 => Self::Mx,
            16 => Self::Txt,
            28 => Self::Aaaa,
            33 => Self::Srv,
            37 => Self::Cert,
            other => Self::Unknown(other),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        record_type.code()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── StoredRecordDescriptor ──────────────────────────────────────────

/// A DNS record as the storage collaborator hands it over.
///
/// `raw_data` is the RFC 1035 wire-format record body for `record_type`.
/// Nothing guarantees that it actually is; decoding is where that gets
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecordDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    pub dclass: u16,
    pub ttl: u32,
    #[serde(with = "hex")]
    pub raw_data: Vec<u8>,
}

impl StoredRecordDescriptor {
    pub fn kind(&self) -> RecordType {
        RecordType::from(self.record_type)
    }
}
