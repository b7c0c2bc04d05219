use crate::models::GroupStat;

/// One line per group in rank order, e.g. `1. Kommuner mean=3.50 hosts=2 total=7`.
pub fn format_ranking_summary(groups: &[GroupStat]) -> String {
    let mut ranked: Vec<&GroupStat> = groups.iter().collect();
    ranked.sort_by_key(|g| g.rank);

    ranked
        .iter()
        .map(|g| {
            let mean = g
                .mean_score()
                .map(|m| format!("{:.2}", m))
                .unwrap_or_else(|| "-".to_string());
            format!("{}. {} mean={} hosts={} total={}", g.rank, g.name, mean, g.hosts.len(), g.total)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
