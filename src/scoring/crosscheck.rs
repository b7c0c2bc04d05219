use std::collections::HashMap;

use crate::models::{GroupReport, GroupStat, HostReport};
use super::row::display_name;
use super::status::points;

/// Email points computed from a host's JSON report fields.
pub fn json_email_points(host: &HostReport) -> i64 {
    [&host.email_tls, &host.email_dane, &host.spf, &host.dmarc]
        .iter()
        .map(|v| v.as_deref().map(points).unwrap_or(0))
        .sum()
}

/// A host whose CSV and JSON exports disagree on email points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMismatch {
    pub host: String,
    pub csv: i64,
    pub json: i64,
}

/// Compare CSV-derived email points with the JSON report for the same group.
/// Hosts present in only one of the two exports are not compared.
pub fn email_mismatches(stat: &GroupStat, report: &GroupReport) -> Vec<EmailMismatch> {
    let from_json: HashMap<String, i64> = report
        .reports
        .iter()
        .map(|h| {
            let name = display_name(&h.hostname).unwrap_or_else(|_| h.hostname.clone());
            (name, json_email_points(h))
        })
        .collect();

    stat.hosts
        .iter()
        .filter_map(|h| {
            let json = *from_json.get(&h.name)?;
            (json != h.email).then(|| EmailMismatch { host: h.name.clone(), csv: h.email, json })
        })
        .collect()
}
