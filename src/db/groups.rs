use std::collections::BTreeMap;

use tracing::{debug, warn};
use crate::errors::HardblameError;
use super::Database;

impl Database {
    /// Store a group's raw JSON report for a day. A second insert for the same
    /// group and day is ignored.
    pub fn add_group_day(&self, group: &str, day: &str, data: &str) -> Result<bool, HardblameError> {
        self.add_group_domain_day(group, "", day, data)
    }

    /// Store one host's JSON report. Duplicates of (group, domain, day) are ignored.
    pub fn add_group_domain_day(&self, group: &str, domain: &str, day: &str, data: &str) -> Result<bool, HardblameError> {
        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO groups (hgroup, domain, day, data) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![group, domain, day, data],
        ).map_err(|e| {
            warn!(group = %group, domain = %domain, day = %day, error = %e, "Failed to insert group data");
            HardblameError::Database(format!("Insert failed: {}", e))
        })?;

        if inserted == 0 {
            debug!(group = %group, domain = %domain, day = %day, "Row already present, ignored");
        }
        Ok(inserted > 0)
    }

    /// Number of host rows stored per group for the given day. The per-group
    /// report row (empty domain) is not counted, so this counts hosts, not rows.
    pub fn group_count(&self, day: &str) -> Result<BTreeMap<String, i64>, HardblameError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT hgroup, COUNT(NULLIF(domain, '')) AS total FROM groups WHERE day = ?1 GROUP BY hgroup"
        ).map_err(|e| HardblameError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![day], |row: &rusqlite::Row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        }).map_err(|e| HardblameError::Database(format!("Query error: {}", e)))?;

        let mut counts = BTreeMap::new();
        for row in rows {
            let (group, count) = row.map_err(|e| HardblameError::Database(format!("Row error: {}", e)))?;
            counts.insert(group, count);
        }
        Ok(counts)
    }
}
