use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Point breakdown for a single scanned host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostStat {
    pub name: String,
    pub dns: i64,
    pub web: i64,
    pub email: i64,
    /// Always `dns + email + web` at the time the host was scored.
    pub total: i64,
    /// 0 until the ranking pass runs.
    pub rank: usize,
}

impl HostStat {
    pub fn new(name: impl Into<String>, dns: i64, email: i64, web: i64) -> Self {
        Self {
            name: name.into(),
            dns,
            web,
            email,
            total: dns + email + web,
            rank: 0,
        }
    }
}

/// Summed point breakdown for a Hardenize group and the hosts it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStat {
    pub name: String,
    pub id: String,
    pub dns: i64,
    pub web: i64,
    pub email: i64,
    pub total: i64,
    pub hosts: Vec<HostStat>,
    pub rank: usize,
}

impl GroupStat {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a host to the running sums, preserving arrival order.
    pub fn push_host(&mut self, host: HostStat) {
        self.dns += host.dns;
        self.email += host.email;
        self.web += host.web;
        self.total += host.total;
        self.hosts.push(host);
    }

    /// Mean per-host total, or `None` for a group without hosts.
    pub fn mean_score(&self) -> Option<f64> {
        if self.hosts.is_empty() {
            None
        } else {
            Some(self.total as f64 / self.hosts.len() as f64)
        }
    }
}

/// One run's output: a single date stamp mapped to the ranked groups.
pub type Report = BTreeMap<String, Vec<GroupStat>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_total_is_sum_of_categories() {
        let host = HostStat::new("example.se", 2, -1, 5);
        assert_eq!(host.total, 6);
        assert_eq!(host.rank, 0);
    }

    #[test]
    fn test_push_host_keeps_running_sums() {
        let mut group = GroupStat::new("Kommuner", "kommuner");
        group.push_host(HostStat::new("a.se", 1, 2, 3));
        group.push_host(HostStat::new("b.se", -2, 0, 1));
        assert_eq!(group.dns, -1);
        assert_eq!(group.email, 2);
        assert_eq!(group.web, 4);
        assert_eq!(group.total, 5);
        assert_eq!(group.hosts[0].name, "a.se");
        assert_eq!(group.hosts[1].name, "b.se");
    }

    #[test]
    fn test_mean_score_empty_group() {
        let group = GroupStat::new("empty", "empty");
        assert_eq!(group.mean_score(), None);
    }

    #[test]
    fn test_group_stat_json_field_names() {
        let mut group = GroupStat::new("Myndigheter", "myndigheter");
        group.push_host(HostStat::new("x.se", 1, 1, 1));
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value["name"], "Myndigheter");
        assert_eq!(value["id"], "myndigheter");
        assert_eq!(value["total"], 3);
        assert_eq!(value["hosts"][0]["dns"], 1);
        assert_eq!(value["hosts"][0]["rank"], 0);
    }
}
