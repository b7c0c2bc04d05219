use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A group as listed by the Hardenize `groups` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardenizeGroup {
    pub id: String,
    pub name: String,
}

impl HardenizeGroup {
    /// Groups whose name starts with `#` are parked upstream and never scored.
    pub fn is_skipped(&self) -> bool {
        self.name.starts_with('#')
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupList {
    #[serde(default)]
    pub groups: Vec<HardenizeGroup>,
}

/// Body of `reports0?group=<id>&format=json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupReport {
    #[serde(default)]
    pub reports: Vec<HostReport>,
}

/// Per-host entry of a JSON group report. Only the fields the scorer reads
/// are typed; everything else is carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostReport {
    #[serde(default)]
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_tls: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_dane: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmarc: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_list_parse() {
        let body = r##"{"groups":[{"id":"kommuner","name":"Kommuner"},{"id":"old","name":"#old"}]}"##;
        let list: GroupList = serde_json::from_str(body).unwrap();
        assert_eq!(list.groups.len(), 2);
        assert!(!list.groups[0].is_skipped());
        assert!(list.groups[1].is_skipped());
    }

    #[test]
    fn test_host_report_keeps_unknown_fields() {
        let body = r#"{"hostname":"a.se","emailTls":"good","spf":"error","hasDnssec":true,"status":"ok"}"#;
        let host: HostReport = serde_json::from_str(body).unwrap();
        assert_eq!(host.hostname, "a.se");
        assert_eq!(host.email_tls.as_deref(), Some("good"));
        assert_eq!(host.email_dane, None);
        assert_eq!(host.extra["hasDnssec"], Value::Bool(true));

        let back = serde_json::to_value(&host).unwrap();
        assert_eq!(back["status"], "ok");
        assert_eq!(back["spf"], "error");
    }

    #[test]
    fn test_group_report_missing_reports_is_empty() {
        let report: GroupReport = serde_json::from_str("{}").unwrap();
        assert!(report.reports.is_empty());
    }
}
