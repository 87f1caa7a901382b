// ── Resource records ──
//
// The strongly-typed form of a single DNS entry. Records are transient:
// built by the parser or decoded from a stored descriptor, handed on, and
// dropped. Nothing here points back at tokens or descriptors.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::descriptor::RecordType;
use super::name::DomainName;
use crate::cert::CertificateType;

/// Longest character-string a TXT record can carry in one segment.
pub const MAX_TXT_SEGMENT_LEN: usize = 255;

/// DNS class. This tool only ever deals with the Internet class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordClass {
    #[default]
    #[serde(rename = "IN")]
    Internet,
}

impl RecordClass {
    pub const fn code(self) -> u16 {
        match self {
            Self::Internet => 1,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internet => f.write_str("IN"),
        }
    }
}

/// A single DNS resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: DomainName,
    #[serde(default)]
    pub class: RecordClass,
    pub ttl: u32,
    #[serde(flatten)]
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            class: RecordClass::Internet,
            ttl,
            data,
        }
    }

    /// The numeric type this record is stored under.
    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

/// Type-specific payload of a [`ResourceRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RecordData {
    /// Host address. IPv6 addresses are stored under the AAAA type code.
    A { address: IpAddr },
    Cname { alias: DomainName },
    Soa(SoaData),
    Mx { exchange: DomainName, preference: u16 },
    Ns { target: DomainName },
    Txt(TxtData),
    Srv(SrvData),
    Cert(CertData),
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A {
                address: IpAddr::V4(_),
            } => RecordType::A,
            Self::A {
                address: IpAddr::V6(_),
            } => RecordType::Aaaa,
            Self::Cname { .. } => RecordType::Cname,
            Self::Soa(_) => RecordType::Soa,
            Self::Mx { .. } => RecordType::Mx,
            Self::Ns { .. } => RecordType::Ns,
            Self::Txt(_) => RecordType::Txt,
            Self::Srv(_) => RecordType::Srv,
            Self::Cert(_) => RecordType::Cert,
        }
    }
}

// ── Per-type payloads ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaData {
    pub primary_source_domain: DomainName,
    /// Mailbox of the zone administrator, encoded as a domain name.
    pub responsible_email: DomainName,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvData {
    pub target: DomainName,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

/// TXT payload as the sequence of character-strings it is stored as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtData {
    segments: Vec<String>,
}

impl TxtData {
    /// Split `text` into segments of at most [`MAX_TXT_SEGMENT_LEN`] bytes,
    /// never cutting a UTF-8 sequence in half.
    pub fn new(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if current.len() + ch.len_utf8() > MAX_TXT_SEGMENT_LEN {
                segments.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
        segments.push(current);
        Self { segments }
    }

    pub(crate) fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First character-string, the only one shown in reports.
    pub fn first_segment(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    /// Full text with every segment concatenated.
    pub fn text(&self) -> String {
        self.segments.concat()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertData {
    pub cert_type: CertificateType,
    pub key_tag: u16,
    pub algorithm: u8,
    #[serde(with = "hex")]
    pub certificate: Vec<u8>,
}
