use std::path::Path;
use crate::errors::HardblameError;
use super::types::HardblameConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

pub async fn parse_config(path: &Path) -> Result<HardblameConfig, HardblameError> {
    if !path.exists() {
        return Err(HardblameError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(HardblameError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<HardblameConfig, HardblameError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(HardblameConfig::default());
    }

    for msg in schema_warnings(&yaml)? {
        warn!(validation_error = %msg, "Config schema warning");
    }

    Ok(serde_yaml::from_value(yaml)?)
}

/// Check the document against the config schema. Findings are advisory:
/// unknown keys are reported, not rejected.
fn schema_warnings(yaml: &serde_yaml::Value) -> Result<Vec<String>, HardblameError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| HardblameError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| HardblameError::Config(format!("Schema compilation error: {}", e)))?;

    let messages = match compiled.validate(&json_value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect(),
    };
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
hardenize:
  api_url: https://www.hardenize.com/org
  web_url: https://www.hardenize.com
  organisation: my-org
  user: api
  passwd: secret
  web_user: me@example.org
  web_passwd: hunter22
db:
  file: /tmp/hardblame.db
apiserver:
  address: 127.0.0.1:8765
  apikey: abcdef
"#;

    #[test]
    fn test_parse_sample() {
        let config = parse_config_str(SAMPLE).unwrap();
        assert_eq!(config.db_file(), "/tmp/hardblame.db");
        let h = config.hardenize_settings().unwrap();
        assert_eq!(h.organisation, "my-org");
        assert_eq!(config.server_settings().unwrap().address, "127.0.0.1:8765");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = parse_config_str("").unwrap();
        assert!(config.hardenize.is_none());
    }

    #[test]
    fn test_schema_warns_on_unknown_key() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("hardenize:\n  apiurl: x\n").unwrap();
        let warnings = schema_warnings(&yaml).unwrap();
        assert!(!warnings.is_empty());
    }

    #[test]
    fn test_schema_clean_sample() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(SAMPLE).unwrap();
        assert!(schema_warnings(&yaml).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_type_is_error() {
        assert!(parse_config_str("hardenize: 42").is_err());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = parse_config(Path::new("/nonexistent/hardblame.yaml")).await.unwrap_err();
        assert!(matches!(err, HardblameError::Config(_)));
    }
}
