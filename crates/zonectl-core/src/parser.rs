// ── Record Parser ──
//
// Turns one ordered array of positional tokens into one typed record. Each
// record kind has a fixed slot layout; required slots come first and optional
// numeric slots default to zero. Parsing is pure: no resolution, no I/O.

use std::net::IpAddr;
use std::num::ParseIntError;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};
use tracing::trace;

use crate::error::ParseError;
use crate::model::{DomainName, RecordData, ResourceRecord, SoaData, SrvData, TxtData};

/// Identity of a positional slot, used in errors and usage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Field {
    Name,
    Address,
    Alias,
    PrimarySourceDomain,
    ResponsibleEmail,
    Serial,
    Ttl,
    Refresh,
    Retry,
    Expire,
    Minimum,
    Exchange,
    Preference,
    Target,
    Text,
    Port,
    Priority,
    Weight,
}

/// One positional argument of a record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument {
    pub field: Field,
    pub required: bool,
    pub help: &'static str,
}

const fn required(field: Field, help: &'static str) -> Argument {
    Argument {
        field,
        required: true,
        help,
    }
}

const fn optional(field: Field, help: &'static str) -> Argument {
    Argument {
        field,
        required: false,
        help,
    }
}

const TTL_HELP: &str = "time to live in seconds, 32-bit unsigned";

const A_ARGS: &[Argument] = &[
    required(Field::Name, "host name for the record"),
    required(Field::Address, "IPv4 or IPv6 address of the host"),
    required(Field::Ttl, TTL_HELP),
];

const CNAME_ARGS: &[Argument] = &[
    required(Field::Name, "the name that will be aliased"),
    required(Field::Alias, "the value of the alias"),
    required(Field::Ttl, TTL_HELP),
];

const SOA_ARGS: &[Argument] = &[
    required(Field::Name, "domain name of the zone"),
    required(
        Field::PrimarySourceDomain,
        "name server that was the primary source for this zone",
    ),
    required(
        Field::ResponsibleEmail,
        "mailbox of the hostmaster, written as a domain name",
    ),
    required(Field::Serial, "version number of the original copy of the zone"),
    required(Field::Ttl, TTL_HELP),
    optional(Field::Refresh, "seconds before the zone should be refreshed"),
    optional(Field::Retry, "seconds before a failed refresh should be retried"),
    optional(
        Field::Expire,
        "seconds before records expire if the zone is not refreshed",
    ),
    optional(Field::Minimum, "minimum TTL for this zone"),
];

const MX_ARGS: &[Argument] = &[
    required(Field::Name, "email domain name for the record"),
    required(Field::Exchange, "SMTP server host name for the domain"),
    required(Field::Ttl, TTL_HELP),
    optional(Field::Preference, "16-bit preference of the record, lower wins"),
];

const NS_ARGS: &[Argument] = &[
    required(Field::Name, "domain name for the record"),
    required(
        Field::Target,
        "the DNS server name that will handle requests for the domain",
    ),
    required(Field::Ttl, TTL_HELP),
];

const TXT_ARGS: &[Argument] = &[
    required(Field::Name, "the name of the text entry"),
    required(Field::Text, "the text value of the record"),
    required(Field::Ttl, TTL_HELP),
];

const SRV_ARGS: &[Argument] = &[
    required(Field::Name, "the name of the SRV entry"),
    required(Field::Target, "the server that hosts the service"),
    required(Field::Port, "the port to use when connecting to the target"),
    required(
        Field::Priority,
        "priority of the record among SRV records of the same name",
    ),
    required(
        Field::Weight,
        "weight of the record among SRV records of the same name and priority",
    ),
    required(Field::Ttl, TTL_HELP),
];

// ── Record kinds ────────────────────────────────────────────────────

/// Record kinds the parser can build from tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RecordKind {
    A,
    Cname,
    Soa,
    Mx,
    Ns,
    Txt,
    Srv,
}

impl RecordKind {
    /// Parse `args` as a record of this kind.
    pub fn parse<S: AsRef<str>>(self, args: &[S]) -> Result<ResourceRecord, ParseError> {
        let record = match self {
            Self::A => parse_a(args),
            Self::Cname => parse_cname(args),
            Self::Soa => parse_soa(args),
            Self::Mx => parse_mx(args),
            Self::Ns => parse_ns(args),
            Self::Txt => parse_txt(args),
            Self::Srv => parse_srv(args),
        }?;
        trace!(kind = %self, name = %record.name, "parsed record");
        Ok(record)
    }

    /// Positional layout, in slot order.
    pub fn arguments(self) -> &'static [Argument] {
        match self {
            Self::A => A_ARGS,
            Self::Cname => CNAME_ARGS,
            Self::Soa => SOA_ARGS,
            Self::Mx => MX_ARGS,
            Self::Ns => NS_ARGS,
            Self::Txt => TXT_ARGS,
            Self::Srv => SRV_ARGS,
        }
    }

    /// One-line positional usage, e.g. `<name> <address> <ttl>`.
    pub fn usage(self) -> String {
        self.arguments()
            .iter()
            .map(|arg| {
                if arg.required {
                    format!("<{}>", arg.field)
                } else {
                    format!("[{}]", arg.field)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ── Per-kind parsers ────────────────────────────────────────────────

pub fn parse_a<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let address = address_at(args, 1, Field::Address)?;
    let ttl = number_at(args, 2, Field::Ttl)?;
    Ok(ResourceRecord::new(name, ttl, RecordData::A { address }))
}

pub fn parse_cname<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let alias = name_at(args, 1, Field::Alias)?;
    let ttl = number_at(args, 2, Field::Ttl)?;
    Ok(ResourceRecord::new(name, ttl, RecordData::Cname { alias }))
}

pub fn parse_soa<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let primary_source_domain = name_at(args, 1, Field::PrimarySourceDomain)?;
    let responsible_email = name_at(args, 2, Field::ResponsibleEmail)?;
    let serial = number_at(args, 3, Field::Serial)?;
    let ttl = number_at(args, 4, Field::Ttl)?;
    let soa = SoaData {
        primary_source_domain,
        responsible_email,
        serial,
        refresh: optional_number_at(args, 5, Field::Refresh)?,
        retry: optional_number_at(args, 6, Field::Retry)?,
        expire: optional_number_at(args, 7, Field::Expire)?,
        minimum: optional_number_at(args, 8, Field::Minimum)?,
    };
    Ok(ResourceRecord::new(name, ttl, RecordData::Soa(soa)))
}

pub fn parse_mx<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let exchange = name_at(args, 1, Field::Exchange)?;
    let ttl = number_at(args, 2, Field::Ttl)?;
    let preference = optional_number_at(args, 3, Field::Preference)?;
    Ok(ResourceRecord::new(
        name,
        ttl,
        RecordData::Mx {
            exchange,
            preference,
        },
    ))
}

pub fn parse_ns<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let target = name_at(args, 1, Field::Target)?;
    let ttl = number_at(args, 2, Field::Ttl)?;
    Ok(ResourceRecord::new(name, ttl, RecordData::Ns { target }))
}

pub fn parse_txt<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let text = token_at(args, 1, Field::Text)?;
    let ttl = number_at(args, 2, Field::Ttl)?;
    Ok(ResourceRecord::new(
        name,
        ttl,
        RecordData::Txt(TxtData::new(text)),
    ))
}

pub fn parse_srv<S: AsRef<str>>(args: &[S]) -> Result<ResourceRecord, ParseError> {
    let name = name_at(args, 0, Field::Name)?;
    let target = name_at(args, 1, Field::Target)?;
    let port = number_at(args, 2, Field::Port)?;
    let priority = number_at(args, 3, Field::Priority)?;
    let weight = number_at(args, 4, Field::Weight)?;
    let ttl = number_at(args, 5, Field::Ttl)?;
    Ok(ResourceRecord::new(
        name,
        ttl,
        RecordData::Srv(SrvData {
            target,
            port,
            priority,
            weight,
        }),
    ))
}

// ── Token helpers ───────────────────────────────────────────────────

/// Only an absent slot is missing; an empty string is still a token.
fn token_at<S: AsRef<str>>(args: &[S], position: usize, field: Field) -> Result<&str, ParseError> {
    args.get(position)
        .map(AsRef::as_ref)
        .ok_or(ParseError::MissingArgument { field, position })
}

fn name_at<S: AsRef<str>>(
    args: &[S],
    position: usize,
    field: Field,
) -> Result<DomainName, ParseError> {
    let token = token_at(args, position, field)?;
    DomainName::parse(token).map_err(|e| ParseError::InvalidName {
        field,
        token: token.to_owned(),
        reason: e.reason,
    })
}

fn address_at<S: AsRef<str>>(args: &[S], position: usize, field: Field) -> Result<IpAddr, ParseError> {
    let token = token_at(args, position, field)?;
    token
        .parse::<IpAddr>()
        .map_err(|source| ParseError::InvalidAddress {
            field,
            token: token.to_owned(),
            source,
        })
}

fn number_at<T, S>(args: &[S], position: usize, field: Field) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
    S: AsRef<str>,
{
    let token = token_at(args, position, field)?;
    parse_number(token, field)
}

fn optional_number_at<T, S>(args: &[S], position: usize, field: Field) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError> + Default,
    S: AsRef<str>,
{
    match args.get(position) {
        Some(token) => parse_number(token.as_ref(), field),
        None => Ok(T::default()),
    }
}

fn parse_number<T: FromStr<Err = ParseIntError>>(token: &str, field: Field) -> Result<T, ParseError> {
    token.parse::<T>().map_err(|source| ParseError::InvalidNumber {
        field,
        token: token.to_owned(),
        source,
    })
}
