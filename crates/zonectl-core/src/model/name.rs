// ── Domain names ──
//
// Every name-bearing field in the codec is a `DomainName`. Construction
// always qualifies the input with the zone root terminator, so two names
// that differ only by a trailing dot or by case compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use hickory_proto::rr::domain::Label;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The zone root terminator that marks a fully-qualified name.
pub const ROOT_TERMINATOR: char = '.';

/// Longest label allowed on the wire (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest name allowed on the wire, length octets included.
pub const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct NameError {
    pub reason: String,
}

impl NameError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

// ── DomainName ──────────────────────────────────────────────────────

/// Fully-qualified domain name, always terminated by the zone root.
///
/// The raw label octets are the only stored form; the presentation text is
/// rendered from them, with the operator's case kept. Comparison and
/// hashing ignore ASCII case, as DNS does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
    text: String,
}

impl DomainName {
    /// Qualify `raw` with the root terminator and validate its syntax.
    ///
    /// Accepts any octets in a label (RFC 2181 §11), with `\X` and `\DDD`
    /// escapes for dots and unprintable bytes.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        Self::from_labels(split_labels(&qualify(raw))?)
    }

    /// The root name, `.`.
    pub fn root() -> Self {
        Self {
            labels: Vec::new(),
            text: ROOT_TERMINATOR.to_string(),
        }
    }

    /// Build a name from raw wire labels, escaping octets that are not
    /// safe to print as-is.
    pub(crate) fn from_labels(labels: Vec<Vec<u8>>) -> Result<Self, NameError> {
        for label in &labels {
            Label::from_raw_bytes(label).map_err(|e| NameError::new(e.to_string()))?;
        }
        let len = wire_len(&labels);
        if len > MAX_NAME_LEN {
            return Err(NameError::new(format!(
                "name is {len} octets on the wire, limit is {MAX_NAME_LEN}"
            )));
        }
        if labels.is_empty() {
            return Ok(Self::root());
        }

        let mut text = String::new();
        for label in &labels {
            for &octet in label {
                escape_octet(octet, &mut text);
            }
            text.push(ROOT_TERMINATOR);
        }
        Ok(Self { labels, text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    /// Length of the uncompressed wire encoding.
    pub fn wire_len(&self) -> usize {
        wire_len(&self.labels)
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Eq for DomainName {}

impl Hash for DomainName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for label in &self.labels {
            state.write_usize(label.len());
            for octet in label {
                state.write_u8(octet.to_ascii_lowercase());
            }
        }
    }
}

/// Append the root terminator unless `raw` already ends with it.
///
/// Idempotent: qualifying an already-qualified name returns it unchanged.
pub fn qualify(raw: &str) -> String {
    if raw.ends_with(ROOT_TERMINATOR) {
        raw.to_owned()
    } else {
        format!("{raw}{ROOT_TERMINATOR}")
    }
}

fn wire_len(labels: &[Vec<u8>]) -> usize {
    labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
}

/// Split presentation text on unescaped dots, resolving escapes.
fn split_labels(text: &str) -> Result<Vec<Vec<u8>>, NameError> {
    if text == "." {
        return Ok(Vec::new());
    }

    let mut labels = Vec::new();
    let mut label = Vec::new();
    let mut bytes = text.bytes();
    while let Some(byte) = bytes.next() {
        match byte {
            b'.' => {
                if label.is_empty() {
                    return Err(NameError::new("empty label"));
                }
                labels.push(std::mem::take(&mut label));
            }
            b'\\' => label.push(unescape(&mut bytes)?),
            _ => label.push(byte),
        }
    }
    // An escaped trailing dot leaves the final label open.
    if !label.is_empty() {
        labels.push(label);
    }
    Ok(labels)
}

fn unescape(bytes: &mut impl Iterator<Item = u8>) -> Result<u8, NameError> {
    let first = bytes
        .next()
        .ok_or_else(|| NameError::new("dangling escape at end of name"))?;
    if !first.is_ascii_digit() {
        return Ok(first);
    }

    let mut value = u32::from(first - b'0');
    for _ in 0..2 {
        match bytes.next() {
            Some(d) if d.is_ascii_digit() => value = value * 10 + u32::from(d - b'0'),
            _ => return Err(NameError::new("decimal escape needs three digits")),
        }
    }
    u8::try_from(value).map_err(|_| NameError::new(format!("escape \\{value} exceeds 255")))
}

fn escape_octet(octet: u8, out: &mut String) {
    match octet {
        b'.' | b'\\' | b'"' | b'(' | b')' | b';' | b'@' | b'$' => {
            out.push('\\');
            out.push(char::from(octet));
        }
        0x21..=0x7e => out.push(char::from(octet)),
        _ => out.push_str(&format!("\\{octet:03}")),
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for DomainName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DomainName> for String {
    fn from(name: DomainName) -> Self {
        name.text
    }
}
