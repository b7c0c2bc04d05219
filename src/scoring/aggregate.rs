use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::errors::HardblameError;
use crate::models::{GroupStat, HardenizeGroup, HostStat};
use super::row::{score_record, Row};

/// Sum host breakdowns into a group, keeping host order. No ranking here.
pub fn aggregate<I>(name: &str, id: &str, hosts: I) -> GroupStat
where
    I: IntoIterator<Item = HostStat>,
{
    let mut group = GroupStat::new(name, id);
    for host in hosts {
        group.push_host(host);
    }
    group
}

/// Parse a raw CSV export into records. Every row is kept, header included.
pub fn read_records(body: &str) -> Result<Vec<StringRecord>, HardblameError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }
    Ok(records)
}

/// Score every data row of a group's CSV export and aggregate the result.
pub fn score_group(group: &HardenizeGroup, records: &[StringRecord]) -> Result<GroupStat, HardblameError> {
    let mut hosts = Vec::with_capacity(records.len());
    for record in records {
        match score_record(record)? {
            Row::Header => continue,
            Row::Host(host) => hosts.push(host),
        }
    }

    let stat = aggregate(&group.name, &group.id, hosts);
    debug!(group = %stat.name, hosts = stat.hosts.len(), total = stat.total, "Aggregated group");
    Ok(stat)
}
