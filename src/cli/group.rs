use std::collections::BTreeMap;

use console::style;

use crate::api::models::{GroupPost, GroupResponse};
use crate::cli::client::ApiClient;
use crate::cli::commands::{GroupArgs, GroupCommand};
use crate::config::HardblameConfig;
use crate::errors::HardblameError;

pub async fn handle_group(config: &HardblameConfig, args: GroupArgs) -> Result<(), HardblameError> {
    let client = ApiClient::new(config.client_settings()?)?;
    match args.command {
        GroupCommand::Count(count) => {
            let resp: GroupResponse = client.post("group", &GroupPost { command: "count".to_string() }).await?;
            if let Some(error) = resp.error {
                return Err(HardblameError::Upstream(error));
            }
            let lines = count_table(&resp.counts);
            if count.headers {
                println!("{}", style(pad_row("Group", "Count", name_width(&resp.counts))).bold());
            }
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn name_width(counts: &BTreeMap<String, i64>) -> usize {
    counts.keys().map(|k| k.chars().count()).max().unwrap_or(0).max("Group".len())
}

fn pad_row(group: &str, count: &str, width: usize) -> String {
    format!("{:<width$} | {}", group, count, width = width)
}

/// `Group | Count` rows sorted by group name.
pub fn count_table(counts: &BTreeMap<String, i64>) -> Vec<String> {
    let width = name_width(counts);
    counts
        .iter()
        .map(|(group, n)| pad_row(group, &n.to_string(), width))
        .collect()
}
