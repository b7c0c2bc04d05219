use std::path::PathBuf;

use serde::Serialize;
use crate::config::HardblameConfig;
use crate::models::GroupStat;

/// How a pipeline run treats its outputs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Fetch and score but write nothing: no raw blobs, no rows, no report.
    pub dry_run: bool,
    pub data_dir: PathBuf,
    pub report_dir: PathBuf,
}

impl RunOptions {
    pub fn from_config(config: &HardblameConfig, dry_run: bool) -> Self {
        Self {
            dry_run,
            data_dir: PathBuf::from(config.data_dir()),
            report_dir: PathBuf::from(config.report_dir()),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub day: String,
    pub groups: Vec<GroupStat>,
    pub skipped_groups: Vec<String>,
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn host_count(&self) -> usize {
        self.groups.iter().map(|g| g.hosts.len()).sum()
    }
}
