// ── Codec domain model ──
//
// Two shapes of the same thing: `ResourceRecord`, the typed record the
// parser builds and the printer renders, and `StoredRecordDescriptor`, the
// opaque form the config service stores.

pub mod descriptor;
pub mod name;
pub mod record;

// ── Re-exports ──────────────────────────────────────────────────────

pub use descriptor::{RecordType, StoredRecordDescriptor};
pub use name::{DomainName, NameError, qualify};
pub use record::{
    CertData, MAX_TXT_SEGMENT_LEN, RecordClass, RecordData, ResourceRecord, SoaData, SrvData,
    TxtData,
};
