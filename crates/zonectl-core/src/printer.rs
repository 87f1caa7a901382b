// ── Record Printer ──
//
// Renders stored descriptors as line-oriented text, one block per record in
// the order given. A body that fails to decode degrades to a one-line notice
// for that block; the rest of the report is unaffected.

use std::error::Error as _;
use std::fmt::Display;
use std::io::{self, Write};

use tracing::{debug, trace};

use crate::cert::{self, CertificateDetail};
use crate::model::{CertData, RecordData, ResourceRecord, StoredRecordDescriptor, qualify};

/// Line that opens every record block.
pub const DIVIDER: &str = "-----------";

/// The whole report for an empty collection.
pub const EMPTY_NOTICE: &str = "Empty record list";

/// Label of the line that replaces an undecodable body.
pub const MALFORMED_NOTICE: &str = "Malformed Record Body";

/// Writes record reports to an output sink.
///
/// The printer holds no state besides its sink, so concurrent reports only
/// need separate printers.
pub struct RecordPrinter<W: Write> {
    out: W,
}

impl<W: Write> RecordPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print every descriptor in order, or the empty notice if there are none.
    pub fn print_all(&mut self, records: &[StoredRecordDescriptor]) -> io::Result<()> {
        if records.is_empty() {
            writeln!(self.out, "{EMPTY_NOTICE}")?;
            return self.out.flush();
        }
        for descriptor in records {
            self.print(descriptor)?;
        }
        Ok(())
    }

    /// Print one record block: divider, common header, then the type body.
    pub fn print(&mut self, descriptor: &StoredRecordDescriptor) -> io::Result<()> {
        let kind = descriptor.kind();
        trace!(name = %descriptor.name, code = descriptor.record_type, "printing record");

        writeln!(self.out, "{DIVIDER}")?;
        self.field("Record Name", qualify(&descriptor.name))?;
        self.field("Type", kind.label())?;
        self.field("TTL", descriptor.ttl)?;

        match ResourceRecord::from_descriptor(descriptor) {
            Ok(Some(record)) => self.body(&record)?,
            Ok(None) => {}
            Err(err) => {
                debug!(name = %descriptor.name, error = %err, "record body did not decode");
                let reason = err.source().map_or_else(|| err.to_string(), ToString::to_string);
                self.field(MALFORMED_NOTICE, reason)?;
            }
        }
        self.out.flush()
    }

    fn body(&mut self, record: &ResourceRecord) -> io::Result<()> {
        match &record.data {
            RecordData::A { address } => self.field("IPAddress", address),
            RecordData::Cname { alias } => self.field("Alias value", alias),
            RecordData::Soa(soa) => {
                self.field("DomainName", &record.name)?;
                self.field("Primary Name Server", &soa.primary_source_domain)?;
                self.field("Domain Manager", &soa.responsible_email)?;
                self.field("Refresh", soa.refresh)?;
                self.field("Retry", soa.retry)?;
                self.field("Expire", soa.expire)?;
                self.field("Minimum", soa.minimum)
            }
            RecordData::Mx {
                exchange,
                preference,
            } => {
                self.field("Exchange Server", exchange)?;
                self.field("Preference", preference)
            }
            RecordData::Ns { target } => {
                self.field("DomainName", &record.name)?;
                self.field("Target Name Server", target)
            }
            RecordData::Txt(txt) => self.field("Text", txt.first_segment()),
            RecordData::Srv(srv) => {
                self.field("Target", &srv.target)?;
                self.field("Port", srv.port)?;
                self.field("Priority", srv.priority)?;
                self.field("Weight", srv.weight)
            }
            RecordData::Cert(cert) => self.certificate(cert),
        }
    }

    /// Subject line for an X.509 payload; anything else prints nothing.
    fn certificate(&mut self, cert: &CertData) -> io::Result<()> {
        match cert::interpret(cert.cert_type, &cert.certificate) {
            Ok(CertificateDetail::X509 { subject }) => self.field("Certificate Subject", subject),
            Ok(CertificateDetail::Unsupported(cert_type)) => {
                debug!(%cert_type, "certificate type not interpreted");
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "omitting certificate subject");
                Ok(())
            }
        }
    }

    fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        writeln!(self.out, "{label}: {value}")
    }
}

/// Render a full report into a string.
pub fn render(records: &[StoredRecordDescriptor]) -> String {
    let mut printer = RecordPrinter::new(Vec::new());
    printer
        .print_all(records)
        .expect("writing to a Vec should not fail");
    String::from_utf8_lossy(&printer.into_inner()).into_owned()
}
