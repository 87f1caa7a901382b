// ── CERT record certificate handling ──
//
// CERT records (RFC 4398) carry a numeric certificate type followed by the
// certificate itself. Only PKIX (X.509) payloads are interpreted; every other
// type is recognised by name but left undescribed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::{FromDer, X509Certificate};

/// PEM label of an armoured X.509 certificate.
const PEM_CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// Certificate type codes from RFC 4398 §2.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum CertificateType {
    /// X.509 as profiled by the IETF PKIX working group.
    Pkix,
    Spki,
    Pgp,
    Ipkix,
    Ispki,
    Ipgp,
    Acpkix,
    Iacpkix,
    Uri,
    Oid,
    Unassigned(u16),
}

impl From<u16> for CertificateType {
    fn from(code: u16) -> Self {
        match code {
            1 => Self::Pkix,
            2 => Self::Spki,
            3 => Self::Pgp,
            4 => Self::Ipkix,
            5 => Self::Ispki,
            6 => Self::Ipgp,
            7 => Self::Acpkix,
            8 => Self::Iacpkix,
            253 => Self::Uri,
            254 => Self::Oid,
            other => Self::Unassigned(other),
        }
    }
}

impl From<CertificateType> for u16 {
    fn from(cert_type: CertificateType) -> Self {
        match cert_type {
            CertificateType::Pkix => 1,
            CertificateType::Spki => 2,
            CertificateType::Pgp => 3,
            CertificateType::Ipkix => 4,
            CertificateType::Ispki => 5,
            CertificateType::Ipgp => 6,
            CertificateType::Acpkix => 7,
            CertificateType::Iacpkix => 8,
            CertificateType::Uri => 253,
            CertificateType::Oid => 254,
            CertificateType::Unassigned(code) => code,
        }
    }
}

impl fmt::Display for CertificateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = match self {
            Self::Pkix => "PKIX",
            Self::Spki => "SPKI",
            Self::Pgp => "PGP",
            Self::Ipkix => "IPKIX",
            Self::Ispki => "ISPKI",
            Self::Ipgp => "IPGP",
            Self::Acpkix => "ACPKIX",
            Self::Iacpkix => "IACPKIX",
            Self::Uri => "URI",
            Self::Oid => "OID",
            Self::Unassigned(code) => return write!(f, "TYPE{code}"),
        };
        f.write_str(mnemonic)
    }
}

// ── Interpretation ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateError {
    /// The payload is well-formed but not a certificate kind we can describe.
    #[error("unrecognized certificate format: {label}")]
    UnrecognizedFormat { label: String },

    #[error("not a valid X.509 certificate: {reason}")]
    Invalid { reason: String },
}

/// What the printer can say about a CERT payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateDetail {
    X509 { subject: String },
    /// A certificate type this tool does not interpret.
    Unsupported(CertificateType),
}

/// Interpret a CERT payload according to its certificate type.
pub fn interpret(
    cert_type: CertificateType,
    data: &[u8],
) -> Result<CertificateDetail, CertificateError> {
    match cert_type {
        CertificateType::Pkix => x509_subject(data).map(|subject| CertificateDetail::X509 { subject }),
        CertificateType::Spki
        | CertificateType::Pgp
        | CertificateType::Ipkix
        | CertificateType::Ispki
        | CertificateType::Ipgp
        | CertificateType::Acpkix
        | CertificateType::Iacpkix
        | CertificateType::Uri
        | CertificateType::Oid
        | CertificateType::Unassigned(_) => Ok(CertificateDetail::Unsupported(cert_type)),
    }
}

/// Subject distinguished name of a DER or PEM encoded X.509 certificate.
fn x509_subject(data: &[u8]) -> Result<String, CertificateError> {
    let der_err = match X509Certificate::from_der(data) {
        Ok((_, cert)) => return Ok(cert.subject().to_string()),
        Err(e) => e,
    };

    let Ok((_, pem)) = parse_x509_pem(data) else {
        return Err(CertificateError::Invalid {
            reason: der_err.to_string(),
        });
    };
    if pem.label != PEM_CERTIFICATE_LABEL {
        return Err(CertificateError::UnrecognizedFormat { label: pem.label });
    }

    let cert = pem.parse_x509().map_err(|e| CertificateError::Invalid {
        reason: e.to_string(),
    })?;
    Ok(cert.subject().to_string())
}
