use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PingPost {
    #[serde(default)]
    pub pings: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub time: DateTime<Local>,
    pub client: String,
    pub message: String,
    pub pings: u64,
    pub pongs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardenizePost {
    pub command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardenizeResponse {
    pub time: DateTime<Local>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HardenizeResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { time: Local::now(), message: message.into(), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { time: Local::now(), message: String::new(), error: Some(error.into()) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupPost {
    pub command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub time: DateTime<Local>,
    #[serde(default)]
    pub counts: BTreeMap<String, i64>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GroupResponse {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            time: Local::now(),
            counts: BTreeMap::new(),
            message: String::new(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub status: u16,
    pub message: String,
}
