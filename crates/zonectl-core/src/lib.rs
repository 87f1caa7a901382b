//! DNS resource-record codec for the zone administration tools.
//!
//! Two independent halves, composed by the caller:
//!
//! - **Record Parser** ([`parser`]): turns an ordered array of positional
//!   string tokens into one validated [`ResourceRecord`]. One entry point
//!   per record kind ([`parse_a`], [`parse_soa`], ...) plus the
//!   [`RecordKind`] selector that also describes each kind's positional
//!   layout for usage text.
//!
//! - **Record Printer** ([`printer`]): renders [`StoredRecordDescriptor`]
//!   values (owner name, numeric type, TTL, wire-format body) as a
//!   deterministic line-oriented report. Bodies that fail to decode degrade
//!   to an inline notice for that record only. CERT payloads carrying an
//!   X.509 certificate show its subject.
//!
//! Between the two sits the wire codec: [`ResourceRecord::to_descriptor`]
//! and [`ResourceRecord::from_descriptor`] translate to and from the stored
//! form. Nothing in this crate touches the network or the filesystem.

pub mod cert;
pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod printer;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cert::{CertificateDetail, CertificateError, CertificateType};
pub use error::{CoreError, DecodeError, ParseError};
pub use parser::{
    Argument, Field, RecordKind, parse_a, parse_cname, parse_mx, parse_ns, parse_soa, parse_srv,
    parse_txt,
};
pub use printer::{RecordPrinter, render};

pub use model::{
    CertData, DomainName, NameError, RecordClass, RecordData, RecordType, ResourceRecord, SoaData,
    SrvData, StoredRecordDescriptor, TxtData, qualify,
};
