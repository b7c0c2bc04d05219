use chrono::{DateTime, Local};
use csv::StringRecord;
use tracing::{debug, info, warn};

use crate::db::Database;
use crate::errors::HardblameError;
use crate::hardenize::ScoreSource;
use crate::models::{GroupList, GroupReport, GroupStat, HardenizeGroup};
use crate::reporting::{build_report, day_stamp, write_report, RawStore};
use crate::scoring::{self, crosscheck};
use super::state::{RunOptions, RunSummary};

/// One fetch, score, aggregate, rank and write pass. Any error aborts the
/// whole run; nothing is skipped and reported later.
pub struct Pipeline<'a> {
    source: &'a dyn ScoreSource,
    db: Option<&'a Database>,
    raw: RawStore,
    options: RunOptions,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn ScoreSource, db: Option<&'a Database>, options: RunOptions) -> Self {
        Self {
            source,
            db,
            raw: RawStore::new(options.data_dir.clone()),
            options,
        }
    }

    pub async fn run(&self) -> Result<RunSummary, HardblameError> {
        self.run_at(Local::now()).await
    }

    /// Run with an explicit clock reading; it names the raw blobs and the report.
    pub async fn run_at(&self, now: DateTime<Local>) -> Result<RunSummary, HardblameError> {
        let day = now.date_naive();
        info!(day = %day_stamp(day), dry_run = self.options.dry_run, "Starting fetch");

        let body = self.source.group_list().await?;
        if !self.options.dry_run {
            self.raw.write_json("groups", now, &body).await?;
        }
        let list: GroupList = serde_json::from_slice(&body)?;
        info!(groups = list.groups.len(), "Fetched group list");

        let mut groups = Vec::with_capacity(list.groups.len());
        let mut skipped_groups = Vec::new();
        for group in &list.groups {
            if group.is_skipped() {
                debug!(group = %group.name, "Skip group");
                skipped_groups.push(group.name.clone());
                continue;
            }
            groups.push(self.process_group(group, now).await?);
        }

        info!(groups = groups.len(), "Computing ranks");
        scoring::rank_all(&mut groups);

        let report = build_report(day, groups);
        let report_path = if self.options.dry_run {
            None
        } else {
            Some(write_report(&self.options.report_dir, day, &report).await?)
        };

        let groups = report.into_values().next().unwrap_or_default();
        Ok(RunSummary {
            day: day_stamp(day),
            groups,
            skipped_groups,
            report_path,
            dry_run: self.options.dry_run,
        })
    }

    async fn process_group(&self, group: &HardenizeGroup, now: DateTime<Local>) -> Result<GroupStat, HardblameError> {
        info!(group = %group.name, id = %group.id, "Process group");

        // Archive before parsing so a malformed payload is still kept.
        let json = self.source.group_report(&group.id).await?;
        if !self.options.dry_run {
            self.raw.write_json(&group.id, now, &json).await?;
        }
        let report: GroupReport = serde_json::from_slice(&json)?;
        if !self.options.dry_run {
            self.persist(group, &day_stamp(now.date_naive()), &json, &report)?;
        }

        let csv = self.source.group_csv(&group.id).await?;
        let records: Vec<StringRecord> = scoring::read_records(&csv)?;
        if !self.options.dry_run {
            self.raw.write_csv(&group.id, now, &records).await?;
        }

        let stat = scoring::score_group(group, &records)?;
        for m in crosscheck::email_mismatches(&stat, &report) {
            warn!(group = %group.id, host = %m.host, csv = m.csv, json = m.json, "Email points differ between CSV and JSON reports");
        }
        Ok(stat)
    }

    fn persist(&self, group: &HardenizeGroup, day: &str, json: &[u8], report: &GroupReport) -> Result<(), HardblameError> {
        let Some(db) = self.db else {
            return Ok(());
        };

        db.add_group_day(&group.id, day, &String::from_utf8_lossy(json))?;
        for host in &report.reports {
            if host.hostname.is_empty() {
                continue;
            }
            let data = serde_json::to_string(host)?;
            db.add_group_domain_day(&group.id, &host.hostname, day, &data)?;
        }
        debug!(group = %group.id, hosts = report.reports.len(), "Stored group report");
        Ok(())
    }
}
