use csv::StringRecord;
use tracing::{debug, trace};

use crate::errors::HardblameError;
use crate::models::HostStat;
use super::status::points;

pub const HOSTNAME: usize = 0;
pub const NAME_SERVERS: usize = 30;
pub const DNSSEC: usize = 31;
pub const EMAIL_TLS: usize = 32;
pub const EMAIL_DANE: usize = 33;
pub const SPF: usize = 34;
pub const DMARC: usize = 35;
pub const WWW_TLS: usize = 36;
// 37 wwwDane, 38 hsts and 39 hpkp are exported but not scored.
pub const CSP: usize = 40;
pub const SECURITY_HEADERS: usize = 41;
pub const COOKIES: usize = 42;
pub const MIXED_CONTENT: usize = 43;
pub const WWW_XSS_PROTECTION: usize = 44;

const DNS_COLUMNS: &[usize] = &[NAME_SERVERS, DNSSEC];
const EMAIL_COLUMNS: &[usize] = &[EMAIL_TLS, EMAIL_DANE, SPF, DMARC];
const WEB_COLUMNS: &[usize] = &[
    WWW_TLS,
    CSP,
    SECURITY_HEADERS,
    COOKIES,
    MIXED_CONTENT,
    WWW_XSS_PROTECTION,
];

/// Smallest record length that covers every scored column.
pub const MIN_FIELDS: usize = WWW_XSS_PROTECTION + 1;

const HEADER_MARKER: &str = "hostname";
const DIAGNOSTIC_LABEL: &str = "nameServers";

/// What a single CSV record turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum Row {
    Header,
    Host(HostStat),
}

pub fn is_header(record: &StringRecord) -> bool {
    record.get(HOSTNAME) == Some(HEADER_MARKER)
}

/// Fail when the export's column layout no longer matches the fixed indices.
pub fn check_header(record: &StringRecord) -> Result<(), HardblameError> {
    match record.get(NAME_SERVERS) {
        Some(DIAGNOSTIC_LABEL) => Ok(()),
        other => Err(HardblameError::Schema(format!(
            "Index to CSV is broken: column {} is {:?}, expected {:?}",
            NAME_SERVERS,
            other.unwrap_or(""),
            DIAGNOSTIC_LABEL
        ))),
    }
}

/// Classify a record and score it when it is a data row.
pub fn score_record(record: &StringRecord) -> Result<Row, HardblameError> {
    if is_header(record) {
        check_header(record)?;
        return Ok(Row::Header);
    }
    score_host(record).map(Row::Host)
}

/// Score one data row into a per-host breakdown.
pub fn score_host(record: &StringRecord) -> Result<HostStat, HardblameError> {
    if record.len() < MIN_FIELDS {
        return Err(HardblameError::Schema(format!(
            "CSV row has {} fields, need at least {}",
            record.len(),
            MIN_FIELDS
        )));
    }

    let name = display_name(&record[HOSTNAME])?;
    let sum = |columns: &[usize]| -> i64 { columns.iter().map(|&i| points(&record[i])).sum() };

    let host = HostStat::new(name, sum(DNS_COLUMNS), sum(EMAIL_COLUMNS), sum(WEB_COLUMNS));
    trace!(host = %host.name, dns = host.dns, email = host.email, web = host.web, total = host.total, "Scored host");
    Ok(host)
}

/// Decode ACE (`xn--`) host names to Unicode for display.
pub fn display_name(hostname: &str) -> Result<String, HardblameError> {
    let hostname = hostname.trim();
    if !hostname.starts_with("xn--") {
        return Ok(hostname.to_string());
    }

    let (decoded, result) = idna::domain_to_unicode(hostname);
    result.map_err(|e| {
        HardblameError::Schema(format!("Cannot decode host name {}: {:?}", hostname, e))
    })?;
    debug!(ace = %hostname, unicode = %decoded, "Decoded punycode host name");
    Ok(decoded)
}
