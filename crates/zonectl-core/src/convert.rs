// ── Record ↔ descriptor conversion ──
//
// Encodes typed records into the descriptor form the config service stores
// and decodes descriptors back. Record bodies go through hickory's RDATA
// codec with canonical (uncompressed) names; CERT (RFC 4398 §2) has no
// hickory type here and travels as an opaque body.

use std::net::IpAddr;

use hickory_proto::error::ProtoResult;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, NULL, SOA, SRV, TXT};
use hickory_proto::rr::{Name, RData, RecordType as WireType};
use hickory_proto::serialize::binary::{BinDecoder, BinEncodable, BinEncoder, Restrict};
use tracing::trace;

use crate::cert::CertificateType;
use crate::error::{CoreError, DecodeError};
use crate::model::{
    CertData, DomainName, RecordData, RecordType, ResourceRecord, SoaData, SrvData,
    StoredRecordDescriptor, TxtData,
};

impl ResourceRecord {
    /// Encode this record into the stored descriptor form.
    ///
    /// Fails only when the body does not fit the 16-bit RDATA length.
    pub fn to_descriptor(&self) -> Result<StoredRecordDescriptor, CoreError> {
        let record_type = self.record_type();
        let raw_data = encode_body(&self.data)
            .map_err(|source| CoreError::Encode { record_type, source })?;

        Ok(StoredRecordDescriptor {
            name: self.name.to_string(),
            record_type: record_type.code(),
            dclass: self.class.code(),
            ttl: self.ttl,
            raw_data,
        })
    }

    /// Decode a stored descriptor.
    ///
    /// Returns `Ok(None)` for record types the codec has no decoder for;
    /// a body that does not match its declared type is
    /// [`CoreError::MalformedRecordBody`].
    pub fn from_descriptor(descriptor: &StoredRecordDescriptor) -> Result<Option<Self>, CoreError> {
        let record_type = descriptor.kind();
        let malformed = |source| CoreError::MalformedRecordBody {
            record_type,
            source,
        };

        let Some(data) = decode_body(record_type, &descriptor.raw_data).map_err(malformed)? else {
            trace!(code = descriptor.record_type, "no decoder for record type");
            return Ok(None);
        };
        let name = DomainName::parse(&descriptor.name).map_err(|e| {
            malformed(DecodeError::OwnerName {
                name: descriptor.name.clone(),
                reason: e.reason,
            })
        })?;

        Ok(Some(Self::new(name, descriptor.ttl, data)))
    }
}

// ── Name bridging ───────────────────────────────────────────────────

fn wire_name(name: &DomainName) -> ProtoResult<Name> {
    Name::from_labels(name.labels().iter().map(Vec::as_slice))
}

fn domain_name(name: &Name) -> Result<DomainName, DecodeError> {
    DomainName::from_labels(name.iter().map(<[u8]>::to_vec).collect())
        .map_err(|e| DecodeError::Name { reason: e.reason })
}

// SOA timers are unsigned here and signed in hickory; the wire bits match.
fn signed(value: u32) -> i32 {
    i32::from_be_bytes(value.to_be_bytes())
}

fn unsigned(value: i32) -> u32 {
    u32::from_be_bytes(value.to_be_bytes())
}

// ── Encoding ────────────────────────────────────────────────────────

fn encode_body(data: &RecordData) -> ProtoResult<Vec<u8>> {
    let rdata = wire_rdata(data)?;
    let mut buf = Vec::new();
    {
        let mut encoder = BinEncoder::new(&mut buf);
        encoder.set_canonical_names(true);
        rdata.emit(&mut encoder)?;
    }
    Ok(buf)
}

fn wire_rdata(data: &RecordData) -> ProtoResult<RData> {
    let rdata = match data {
        RecordData::A {
            address: IpAddr::V4(v4),
        } => RData::A(A(*v4)),
        RecordData::A {
            address: IpAddr::V6(v6),
        } => RData::AAAA(AAAA(*v6)),
        RecordData::Cname { alias } => RData::CNAME(CNAME(wire_name(alias)?)),
        RecordData::Soa(soa) => RData::SOA(SOA::new(
            wire_name(&soa.primary_source_domain)?,
            wire_name(&soa.responsible_email)?,
            soa.serial,
            signed(soa.refresh),
            signed(soa.retry),
            signed(soa.expire),
            soa.minimum,
        )),
        RecordData::Mx {
            exchange,
            preference,
        } => RData::MX(MX::new(*preference, wire_name(exchange)?)),
        RecordData::Ns { target } => RData::NS(NS(wire_name(target)?)),
        RecordData::Txt(txt) => RData::TXT(TXT::from_bytes(
            txt.segments().iter().map(String::as_bytes).collect(),
        )),
        RecordData::Srv(srv) => RData::SRV(SRV::new(
            srv.priority,
            srv.weight,
            srv.port,
            wire_name(&srv.target)?,
        )),
        RecordData::Cert(cert) => RData::Unknown {
            code: WireType::Unknown(RecordType::Cert.code()),
            rdata: NULL::with(cert_body(cert)?),
        },
    };
    Ok(rdata)
}

fn cert_body(cert: &CertData) -> ProtoResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut encoder = BinEncoder::new(&mut buf);
        encoder.emit_u16(cert.cert_type.into())?;
        encoder.emit_u16(cert.key_tag)?;
        encoder.emit_u8(cert.algorithm)?;
        encoder.emit_vec(&cert.certificate)?;
    }
    Ok(buf)
}

// ── Decoding ────────────────────────────────────────────────────────

fn decode_body(record_type: RecordType, raw: &[u8]) -> Result<Option<RecordData>, DecodeError> {
    let wire_type = match record_type {
        RecordType::A => {
            address_length(raw, 4)?;
            WireType::A
        }
        RecordType::Aaaa => {
            address_length(raw, 16)?;
            WireType::AAAA
        }
        RecordType::Cname => WireType::CNAME,
        RecordType::Soa => WireType::SOA,
        RecordType::Mx => WireType::MX,
        RecordType::Ns => WireType::NS,
        RecordType::Txt => WireType::TXT,
        RecordType::Srv => WireType::SRV,
        RecordType::Cert => WireType::Unknown(RecordType::Cert.code()),
        RecordType::Unknown(_) => return Ok(None),
    };
    let length = u16::try_from(raw.len()).map_err(|_| DecodeError::Oversize { len: raw.len() })?;

    let mut decoder = BinDecoder::new(raw);
    let data = match RData::read(&mut decoder, wire_type, Restrict::new(length))? {
        RData::A(A(v4)) => RecordData::A {
            address: IpAddr::V4(v4),
        },
        RData::AAAA(AAAA(v6)) => RecordData::A {
            address: IpAddr::V6(v6),
        },
        RData::CNAME(CNAME(alias)) => RecordData::Cname {
            alias: domain_name(&alias)?,
        },
        RData::SOA(soa) => RecordData::Soa(SoaData {
            primary_source_domain: domain_name(soa.mname())?,
            responsible_email: domain_name(soa.rname())?,
            serial: soa.serial(),
            refresh: unsigned(soa.refresh()),
            retry: unsigned(soa.retry()),
            expire: unsigned(soa.expire()),
            minimum: soa.minimum(),
        }),
        RData::MX(mx) => RecordData::Mx {
            exchange: domain_name(mx.exchange())?,
            preference: mx.preference(),
        },
        RData::NS(NS(target)) => RecordData::Ns {
            target: domain_name(&target)?,
        },
        RData::TXT(txt) => {
            if txt.txt_data().is_empty() {
                return Err(DecodeError::EmptyText);
            }
            let segments = txt
                .iter()
                .map(|s| String::from_utf8_lossy(s).into_owned())
                .collect();
            RecordData::Txt(TxtData::from_segments(segments))
        }
        RData::SRV(srv) => RecordData::Srv(SrvData {
            target: domain_name(srv.target())?,
            port: srv.port(),
            priority: srv.priority(),
            weight: srv.weight(),
        }),
        RData::Unknown { rdata, .. } => RecordData::Cert(cert_data(rdata.anything())?),
        other => {
            return Err(DecodeError::Wire {
                reason: format!("unexpected {} body", other.record_type()),
            });
        }
    };
    Ok(Some(data))
}

fn cert_data(body: &[u8]) -> Result<CertData, DecodeError> {
    let mut decoder = BinDecoder::new(body);
    let cert_type = CertificateType::from(decoder.read_u16()?.unverified());
    let key_tag = decoder.read_u16()?.unverified();
    let algorithm = decoder.read_u8()?.unverified();
    let rest = decoder.len();
    let certificate = decoder.read_vec(rest)?.unverified();
    Ok(CertData {
        cert_type,
        key_tag,
        algorithm,
        certificate,
    })
}

fn address_length(raw: &[u8], expected: usize) -> Result<(), DecodeError> {
    if raw.len() == expected {
        Ok(())
    } else {
        Err(DecodeError::AddressLength {
            expected,
            actual: raw.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn name(raw: &str) -> DomainName {
        DomainName::parse(raw).unwrap()
    }

    fn descriptor(record_type: u16, raw_data: Vec<u8>) -> StoredRecordDescriptor {
        StoredRecordDescriptor {
            name: "example.com.".into(),
            record_type,
            dclass: 1,
            ttl: 3600,
            raw_data,
        }
    }

    #[test]
    fn a_record_encodes_four_octets() {
        let record = ResourceRecord::new(
            name("example.com"),
            3600,
            RecordData::A {
                address: "10.0.0.5".parse().unwrap(),
            },
        );
        let stored = record.to_descriptor().unwrap();
        assert_eq!(stored, descriptor(1, vec![10, 0, 0, 5]));
        assert_eq!(ResourceRecord::from_descriptor(&stored).unwrap(), Some(record));
    }

    #[test]
    fn ipv6_address_is_stored_as_aaaa() {
        let record = ResourceRecord::new(
            name("example.com"),
            60,
            RecordData::A {
                address: "2001:db8::1".parse().unwrap(),
            },
        );
        let stored = record.to_descriptor().unwrap();
        assert_eq!(stored.record_type, 28);
        assert_eq!(stored.raw_data.len(), 16);
        assert_eq!(ResourceRecord::from_descriptor(&stored).unwrap(), Some(record));
    }

    #[test]
    fn soa_body_layout() {
        let record = ResourceRecord::new(
            name("zone.example"),
            3600,
            RecordData::Soa(SoaData {
                primary_source_domain: name("ns1.example"),
                responsible_email: name("admin.example"),
                serial: 5,
                refresh: 7200,
                retry: 600,
                expire: 86400,
                minimum: 300,
            }),
        );
        let stored = record.to_descriptor().unwrap();
        let mut expected = b"\x03ns1\x07example\x00\x05admin\x07example\x00".to_vec();
        for value in [5_u32, 7200, 600, 86400, 300] {
            expected.extend_from_slice(&value.to_be_bytes());
        }
        assert_eq!(stored.raw_data, expected);
        assert_eq!(ResourceRecord::from_descriptor(&stored).unwrap(), Some(record));
    }

    #[test]
    fn mx_and_srv_put_numbers_before_target() {
        let mx = RecordData::Mx {
            exchange: name("mail.example.com"),
            preference: 10,
        };
        assert_eq!(&encode_body(&mx).unwrap()[..2], [0, 10]);

        let srv = RecordData::Srv(SrvData {
            target: name("sip.example.com"),
            port: 5060,
            priority: 1,
            weight: 2,
        });
        assert_eq!(&encode_body(&srv).unwrap()[..6], [0, 1, 0, 2, 0x13, 0xc4]);
    }

    #[test]
    fn long_txt_round_trips_as_segments() {
        let text = "x".repeat(300);
        let record = ResourceRecord::new(name("example.com"), 60, RecordData::Txt(TxtData::new(&text)));
        let stored = record.to_descriptor().unwrap();
        assert_eq!(stored.raw_data.len(), 300 + 2);
        assert_eq!(stored.raw_data[0], 255);

        let decoded = ResourceRecord::from_descriptor(&stored).unwrap().unwrap();
        let RecordData::Txt(txt) = decoded.data else {
            panic!("expected TXT");
        };
        assert_eq!(txt.segments().len(), 2);
        assert_eq!(txt.text(), text);
    }

    #[test]
    fn cert_layout() {
        let data = RecordData::Cert(CertData {
            cert_type: CertificateType::Pkix,
            key_tag: 0x1234,
            algorithm: 5,
            certificate: vec![0xaa, 0xbb],
        });
        assert_eq!(encode_body(&data).unwrap(), [0, 1, 0x12, 0x34, 5, 0xaa, 0xbb]);

        let stored = descriptor(37, encode_body(&data).unwrap());
        let decoded = ResourceRecord::from_descriptor(&stored).unwrap().unwrap();
        assert_eq!(decoded.data, data);
    }

    #[test]
    fn unknown_type_has_no_body() {
        let decoded = ResourceRecord::from_descriptor(&descriptor(99, vec![1, 2, 3])).unwrap();
        assert_eq!(decoded, None);
    }

    #[test]
    fn short_address_is_malformed() {
        let err = ResourceRecord::from_descriptor(&descriptor(1, vec![10, 0, 0])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedRecordBody {
                record_type: RecordType::A,
                source: DecodeError::AddressLength {
                    expected: 4,
                    actual: 3
                },
            }
        ));
    }

    #[test]
    fn trailing_bytes_are_malformed() {
        let mut raw = b"\x02ns\x07example\x00".to_vec();
        raw.push(0xff);
        let err = ResourceRecord::from_descriptor(&descriptor(2, raw)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedRecordBody {
                record_type: RecordType::Ns,
                source: DecodeError::Wire { .. },
            }
        ));
    }

    #[test]
    fn soa_names_are_not_compressed() {
        let record = ResourceRecord::new(
            name("example.com"),
            3600,
            RecordData::Soa(SoaData {
                primary_source_domain: name("ns1.example.com"),
                responsible_email: name("hostmaster.example.com"),
                serial: 1,
                refresh: 0,
                retry: 0,
                expire: 0,
                minimum: 0,
            }),
        );
        let raw = record.to_descriptor().unwrap().raw_data;
        assert!(!raw.contains(&0xc0), "{raw:02x?}");
        assert_eq!(raw.len(), 17 + 24 + 20);
    }

    #[test]
    fn self_referencing_pointer_is_malformed() {
        let err = ResourceRecord::from_descriptor(&descriptor(5, vec![0xc0, 0x00])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedRecordBody {
                source: DecodeError::Wire { .. },
                ..
            }
        ));
    }

    #[test]
    fn short_cert_is_malformed() {
        let err = ResourceRecord::from_descriptor(&descriptor(37, vec![0, 1, 0])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedRecordBody {
                record_type: RecordType::Cert,
                source: DecodeError::Wire { .. },
            }
        ));
    }

    #[test]
    fn oversize_txt_cannot_be_encoded() {
        let text = "x".repeat(70_000);
        let record = ResourceRecord::new(name("example.com"), 60, RecordData::Txt(TxtData::new(&text)));
        assert!(matches!(
            record.to_descriptor().unwrap_err(),
            CoreError::Encode {
                record_type: RecordType::Txt,
                ..
            }
        ));
    }

    #[test]
    fn soa_timers_keep_their_high_bit() {
        let record = ResourceRecord::new(
            name("example.com"),
            3600,
            RecordData::Soa(SoaData {
                primary_source_domain: name("ns1.example.com"),
                responsible_email: name("admin.example.com"),
                serial: u32::MAX,
                refresh: u32::MAX,
                retry: 0x8000_0000,
                expire: 1,
                minimum: u32::MAX,
            }),
        );
        let stored = record.to_descriptor().unwrap();
        assert_eq!(ResourceRecord::from_descriptor(&stored).unwrap(), Some(record));
    }

    #[test]
    fn empty_txt_is_malformed() {
        let err = ResourceRecord::from_descriptor(&descriptor(16, Vec::new())).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedRecordBody {
                source: DecodeError::EmptyText,
                ..
            }
        ));
    }

    #[test]
    fn escaped_names_survive_the_descriptor() {
        let record = ResourceRecord::new(
            name("a\\065\\.x.example"),
            300,
            RecordData::Cname {
                alias: name("0/25.2.0.192.in-addr.arpa"),
            },
        );
        let stored = record.to_descriptor().unwrap();
        assert_eq!(stored.name, "aA\\.x.example.");

        let decoded = ResourceRecord::from_descriptor(&stored).unwrap().unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.name.as_str(), record.name.as_str());
    }

    #[test]
    fn owner_name_case_does_not_change_identity() {
        let mut stored = descriptor(1, vec![10, 0, 0, 5]);
        stored.name = "EXAMPLE.com.".into();
        let decoded = ResourceRecord::from_descriptor(&stored).unwrap().unwrap();
        assert_eq!(decoded.name, name("example.COM"));
        assert_eq!(decoded.name.as_str(), "EXAMPLE.com.");
    }

    #[test]
    fn bad_owner_name_is_malformed() {
        let mut stored = descriptor(1, vec![10, 0, 0, 5]);
        stored.name = "a..b".into();
        let err = ResourceRecord::from_descriptor(&stored).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MalformedRecordBody {
                source: DecodeError::OwnerName { .. },
                ..
            }
        ));
    }
}
