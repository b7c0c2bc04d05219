use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "hardenize": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "api_url": { "type": "string" },
                    "web_url": { "type": "string" },
                    "login_url": { "type": "string" },
                    "organisation": { "type": "string" },
                    "user": { "type": "string" },
                    "passwd": { "type": "string" },
                    "web_user": { "type": "string" },
                    "web_passwd": { "type": "string" }
                }
            },
            "db": {
                "type": "object",
                "properties": {
                    "file": { "type": "string" }
                }
            },
            "apiserver": {
                "type": "object",
                "properties": {
                    "address": { "type": "string" },
                    "apikey": { "type": "string" },
                    "cert_file": { "type": "string" },
                    "key_file": { "type": "string" }
                }
            },
            "client": {
                "type": "object",
                "properties": {
                    "base_url": { "type": "string" },
                    "apikey": { "type": "string" },
                    "root_ca": { "type": "string" }
                }
            },
            "output": {
                "type": "object",
                "properties": {
                    "data_dir": { "type": "string" },
                    "report_dir": { "type": "string" }
                }
            }
        }
    })
});
