#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use hardblame::errors::HardblameError;
use hardblame::hardenize::{Connector, ScoreSource};

const SCORED: [usize; 12] = [30, 31, 32, 33, 34, 35, 36, 40, 41, 42, 43, 44];

/// A CSV row worth `goods` points.
pub fn csv_row(host: &str, goods: usize) -> String {
    let mut fields = vec!["-".to_string(); 45];
    fields[0] = host.to_string();
    for (i, col) in SCORED.iter().enumerate() {
        fields[*col] = if i < goods { "good" } else { "neutral" }.to_string();
    }
    fields.join(",")
}

pub fn csv_header() -> String {
    let mut fields = vec!["col".to_string(); 45];
    fields[0] = "hostname".to_string();
    fields[30] = "nameServers".to_string();
    fields.join(",")
}

#[derive(Clone)]
pub struct FakeSource {
    pub groups: String,
    pub reports: HashMap<String, String>,
    pub csvs: HashMap<String, String>,
}

impl FakeSource {
    /// Group A with hosts worth 3 and 7, group B with one host worth 10.
    pub fn two_groups() -> Self {
        let mut reports = HashMap::new();
        reports.insert("a".to_string(), r#"{"reports":[{"hostname":"a3.se"},{"hostname":"a7.se"}]}"#.to_string());
        reports.insert("b".to_string(), r#"{"reports":[{"hostname":"b10.se"}]}"#.to_string());
        let mut csvs = HashMap::new();
        csvs.insert("a".to_string(), [csv_header(), csv_row("a3.se", 3), csv_row("a7.se", 7)].join("\n"));
        csvs.insert("b".to_string(), [csv_header(), csv_row("b10.se", 10)].join("\n"));
        Self {
            groups: r#"{"groups":[{"id":"a","name":"A"},{"id":"b","name":"B"}]}"#.to_string(),
            reports,
            csvs,
        }
    }
}

#[async_trait]
impl ScoreSource for FakeSource {
    async fn group_list(&self) -> Result<Vec<u8>, HardblameError> {
        Ok(self.groups.clone().into_bytes())
    }

    async fn group_report(&self, group_id: &str) -> Result<Vec<u8>, HardblameError> {
        self.reports
            .get(group_id)
            .map(|r| r.clone().into_bytes())
            .ok_or_else(|| HardblameError::Upstream(format!("no report for {}", group_id)))
    }

    async fn group_csv(&self, group_id: &str) -> Result<String, HardblameError> {
        self.csvs
            .get(group_id)
            .cloned()
            .ok_or_else(|| HardblameError::Upstream(format!("no csv for {}", group_id)))
    }
}

pub struct FakeConnector(pub FakeSource);

#[async_trait]
impl Connector for FakeConnector {
    async fn connect(&self) -> Result<Box<dyn ScoreSource>, HardblameError> {
        Ok(Box::new(self.0.clone()))
    }
}

pub struct FailingConnector;

#[async_trait]
impl Connector for FailingConnector {
    async fn connect(&self) -> Result<Box<dyn ScoreSource>, HardblameError> {
        Err(HardblameError::Authentication("login rejected".to_string()))
    }
}
