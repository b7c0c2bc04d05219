use std::cmp::Ordering;

use crate::models::GroupStat;

/// A named score taking part in one ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub name: String,
    /// `None` sorts after every scored entry.
    pub score: Option<f64>,
}

impl RankEntry {
    pub fn new(name: impl Into<String>, score: Option<f64>) -> Self {
        Self { name: name.into(), score }
    }
}

fn descending(a: &Option<f64>, b: &Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rank entries by descending score. Returns the 1-based rank of each entry,
/// aligned with the input slice. The sort is stable: equal scores keep the
/// order they were presented in, and every entry gets its own position.
pub fn rank(entries: &[RankEntry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| descending(&entries[a].score, &entries[b].score));

    let mut ranks = vec![0; entries.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Rank groups by mean per-host total. Groups without hosts go last.
pub fn rank_groups(groups: &mut [GroupStat]) {
    let entries: Vec<RankEntry> = groups
        .iter()
        .map(|g| RankEntry::new(g.name.clone(), g.mean_score()))
        .collect();
    for (group, rank) in groups.iter_mut().zip(rank(&entries)) {
        group.rank = rank;
    }
}

/// Rank the hosts of one group by their raw total.
pub fn rank_hosts(group: &mut GroupStat) {
    let entries: Vec<RankEntry> = group
        .hosts
        .iter()
        .map(|h| RankEntry::new(h.name.clone(), Some(h.total as f64)))
        .collect();
    for (host, rank) in group.hosts.iter_mut().zip(rank(&entries)) {
        host.rank = rank;
    }
}

/// Full ranking pass: across groups, then across hosts within each group.
pub fn rank_all(groups: &mut [GroupStat]) {
    rank_groups(groups);
    for group in groups.iter_mut() {
        rank_hosts(group);
    }
}
