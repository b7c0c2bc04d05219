use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::errors::HardblameError;
use crate::models::{GroupStat, Report};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn day_stamp(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn report_file_name(day: NaiveDate) -> String {
    format!("data-{}.json", day_stamp(day))
}

/// Wrap the ranked groups in the single-key, date-stamped report map.
pub fn build_report(day: NaiveDate, groups: Vec<GroupStat>) -> Report {
    let mut report = Report::new();
    report.insert(day_stamp(day), groups);
    report
}

/// Serialize the report and move it into place as `data-YYYY-MM-DD.json`.
///
/// The document is written to a hidden sibling first and renamed over the
/// target once it is synced, so a failed run never leaves a truncated file.
pub async fn write_report(dir: &Path, day: NaiveDate, report: &Report) -> Result<PathBuf, HardblameError> {
    let bytes = serde_json::to_vec(report)?;

    tokio::fs::create_dir_all(dir).await?;
    let target = dir.join(report_file_name(day));
    let staging = dir.join(format!(".{}.tmp", report_file_name(day)));

    if let Err(e) = write_synced(&staging, &bytes).await {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            warn!(path = %staging.display(), error = %cleanup, "Failed to remove staging file");
        }
        return Err(e);
    }
    tokio::fs::rename(&staging, &target).await?;

    info!(path = %target.display(), bytes = bytes.len(), "Report written");
    Ok(target)
}

async fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), HardblameError> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    Ok(())
}
