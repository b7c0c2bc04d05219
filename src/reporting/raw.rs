use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use csv::StringRecord;
use tracing::debug;

use crate::errors::HardblameError;
use super::writer::DAY_FORMAT;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Filesystem archive of the payloads fetched from Hardenize, laid out as
/// `<base>/YYYY-MM-DD/<name>-HH:MM:SS.<ext>`.
#[derive(Debug, Clone)]
pub struct RawStore {
    base: PathBuf,
}

impl RawStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn blob_path(&self, name: &str, at: DateTime<Local>, ext: &str) -> PathBuf {
        self.base
            .join(at.format(DAY_FORMAT).to_string())
            .join(format!("{}-{}.{}", name, at.format(TIME_FORMAT), ext))
    }

    pub async fn write_json(&self, name: &str, at: DateTime<Local>, body: &[u8]) -> Result<PathBuf, HardblameError> {
        self.write(self.blob_path(name, at, "json"), body).await
    }

    /// Archive a CSV export with fields joined by `", "`, one record per line.
    pub async fn write_csv(&self, name: &str, at: DateTime<Local>, records: &[StringRecord]) -> Result<PathBuf, HardblameError> {
        let body = records
            .iter()
            .map(|r| r.iter().collect::<Vec<_>>().join(", "))
            .collect::<Vec<_>>()
            .join("\n");
        self.write(self.blob_path(name, at, "csv"), body.as_bytes()).await
    }

    async fn write(&self, path: PathBuf, body: &[u8]) -> Result<PathBuf, HardblameError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, body).await?;
        debug!(path = %path.display(), bytes = body.len(), "Raw payload archived");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 30).unwrap()
    }

    #[test]
    fn test_blob_path_layout() {
        let store = RawStore::new("data");
        let path = store.blob_path("kommuner", at(), "json");
        assert_eq!(path, PathBuf::from("data/2024-03-07/kommuner-09:05:30.json"));
    }

    #[tokio::test]
    async fn test_write_csv_joins_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = RawStore::new(dir.path());
        let records = vec![
            StringRecord::from(vec!["hostname", "status"]),
            StringRecord::from(vec!["a.se", "good"]),
        ];
        let path = store.write_csv("g", at(), &records).await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hostname, status\na.se, good");
    }

    #[tokio::test]
    async fn test_write_json_creates_day_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = RawStore::new(dir.path().join("nested"));
        let path = store.write_json("groups", at(), b"{}").await.unwrap();
        assert!(path.starts_with(dir.path().join("nested").join("2024-03-07")));
        assert_eq!(std::fs::read(path).unwrap(), b"{}");
    }
}
