use serde::{Deserialize, Serialize};
use crate::errors::HardblameError;
use super::credentials::resolve_credential;

pub const DEFAULT_CONFIG_FILE: &str = "./hardblame.yaml";
pub const DEFAULT_DB_FILE: &str = "./data/hardblame.db";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HardblameConfig {
    pub hardenize: Option<HardenizeConfig>,
    pub db: Option<DbConfig>,
    pub apiserver: Option<ApiServerConfig>,
    pub client: Option<ClientConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HardenizeConfig {
    /// Root of the REST API; endpoints live at `<api_url>/<organisation>/<endpoint>`.
    pub api_url: Option<String>,
    /// Root of the web interface used for login and CSV exports.
    pub web_url: Option<String>,
    pub login_url: Option<String>,
    pub organisation: Option<String>,
    pub user: Option<String>,
    pub passwd: Option<String>,
    pub web_user: Option<String>,
    pub web_passwd: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DbConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ApiServerConfig {
    pub address: Option<String>,
    pub apikey: Option<String>,
    /// PEM certificate chain; serving is HTTPS when this and `key_file` are set.
    pub cert_file: Option<String>,
    pub key_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub apikey: Option<String>,
    /// Extra PEM root certificate trusted for the API server.
    pub root_ca: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub data_dir: Option<String>,
    pub report_dir: Option<String>,
}

/// Everything the pipeline needs to talk to Hardenize, with credentials resolved.
#[derive(Debug, Clone)]
pub struct HardenizeSettings {
    pub api_url: String,
    pub web_url: String,
    pub login_url: String,
    pub organisation: String,
    pub user: String,
    pub passwd: String,
    pub web_user: String,
    pub web_passwd: String,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub address: String,
    pub apikey: String,
    pub tls: Option<TlsFiles>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsFiles {
    pub cert_file: String,
    pub key_file: String,
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub apikey: String,
    pub root_ca: Option<String>,
}

fn required(value: &Option<String>, what: &str) -> Result<String, HardblameError> {
    match value.as_deref().map(resolve_credential) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(HardblameError::Config(format!("{} must be given", what))),
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value.as_deref()
        .map(resolve_credential)
        .filter(|v| !v.trim().is_empty())
}

fn tls_files(s: &ApiServerConfig) -> Result<Option<TlsFiles>, HardblameError> {
    match (optional(&s.cert_file), optional(&s.key_file)) {
        (Some(cert_file), Some(key_file)) => Ok(Some(TlsFiles { cert_file, key_file })),
        (None, None) => Ok(None),
        _ => Err(HardblameError::Config(
            "apiserver.cert_file and apiserver.key_file must be given together".to_string(),
        )),
    }
}

impl HardblameConfig {
    pub fn hardenize_settings(&self) -> Result<HardenizeSettings, HardblameError> {
        let h = self.hardenize.clone().unwrap_or_default();
        let api_url = required(&h.api_url, "Hardenize API url (hardenize.api_url)")?;
        let web_url = required(&h.web_url, "Hardenize web url (hardenize.web_url)")?;
        let web_url = web_url.trim_end_matches('/').to_string();
        let login_url = h.login_url
            .as_deref()
            .map(resolve_credential)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| format!("{}/account/signIn", web_url));

        Ok(HardenizeSettings {
            api_url: api_url.trim_end_matches('/').to_string(),
            login_url,
            organisation: required(&h.organisation, "Organisation (hardenize.organisation)")?,
            user: required(&h.user, "Hardenize API user (hardenize.user)")?,
            passwd: required(&h.passwd, "Hardenize API password (hardenize.passwd)")?,
            web_user: required(&h.web_user, "Hardenize web user (hardenize.web_user)")?,
            web_passwd: required(&h.web_passwd, "Hardenize web password (hardenize.web_passwd)")?,
            web_url,
        })
    }

    pub fn server_settings(&self) -> Result<ServerSettings, HardblameError> {
        let s = self.apiserver.clone().unwrap_or_default();
        Ok(ServerSettings {
            address: required(&s.address, "API server address (apiserver.address)")?,
            apikey: required(&s.apikey, "API server key (apiserver.apikey)")?,
            tls: tls_files(&s)?,
        })
    }

    pub fn client_settings(&self) -> Result<ClientSettings, HardblameError> {
        let c = self.client.clone().unwrap_or_default();
        Ok(ClientSettings {
            base_url: required(&c.base_url, "Server base url (client.base_url)")?
                .trim_end_matches('/')
                .to_string(),
            apikey: required(&c.apikey, "Server API key (client.apikey)")?,
            root_ca: optional(&c.root_ca),
        })
    }

    pub fn db_file(&self) -> String {
        self.db.as_ref()
            .and_then(|d| d.file.clone())
            .unwrap_or_else(|| DEFAULT_DB_FILE.to_string())
    }

    pub fn data_dir(&self) -> String {
        self.output.as_ref()
            .and_then(|o| o.data_dir.clone())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
    }

    pub fn report_dir(&self) -> String {
        self.output.as_ref()
            .and_then(|o| o.report_dir.clone())
            .unwrap_or_else(|| ".".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hardenize() -> HardenizeConfig {
        HardenizeConfig {
            api_url: Some("https://api.example.com/org/".to_string()),
            web_url: Some("https://www.example.com/".to_string()),
            login_url: None,
            organisation: Some("my-org".to_string()),
            user: Some("api".to_string()),
            passwd: Some("secret".to_string()),
            web_user: Some("me@example.org".to_string()),
            web_passwd: Some("hunter22".to_string()),
        }
    }

    #[test]
    fn test_hardenize_settings_defaults_login_url() {
        let config = HardblameConfig { hardenize: Some(full_hardenize()), ..Default::default() };
        let settings = config.hardenize_settings().unwrap();
        assert_eq!(settings.api_url, "https://api.example.com/org");
        assert_eq!(settings.web_url, "https://www.example.com");
        assert_eq!(settings.login_url, "https://www.example.com/account/signIn");
    }

    #[test]
    fn test_missing_organisation_is_config_error() {
        let mut h = full_hardenize();
        h.organisation = None;
        let config = HardblameConfig { hardenize: Some(h), ..Default::default() };
        match config.hardenize_settings() {
            Err(HardblameError::Config(msg)) => assert!(msg.contains("organisation")),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_password_is_config_error() {
        let mut h = full_hardenize();
        h.web_passwd = Some("  ".to_string());
        let config = HardblameConfig { hardenize: Some(h), ..Default::default() };
        assert!(config.hardenize_settings().is_err());
    }

    #[test]
    fn test_missing_sections() {
        let config = HardblameConfig::default();
        assert!(config.hardenize_settings().is_err());
        assert!(config.server_settings().is_err());
        assert!(config.client_settings().is_err());
    }

    #[test]
    fn test_defaults_for_paths() {
        let config = HardblameConfig::default();
        assert_eq!(config.db_file(), DEFAULT_DB_FILE);
        assert_eq!(config.data_dir(), "data");
        assert_eq!(config.report_dir(), ".");
    }

    #[test]
    fn test_credentials_resolved_from_env() {
        std::env::set_var("TEST_HARDBLAME_APIKEY", "k3y-value");
        let config = HardblameConfig {
            apiserver: Some(ApiServerConfig {
                address: Some("127.0.0.1:8765".to_string()),
                apikey: Some("$TEST_HARDBLAME_APIKEY".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let settings = config.server_settings().unwrap();
        assert_eq!(settings.apikey, "k3y-value");
        std::env::remove_var("TEST_HARDBLAME_APIKEY");
    }

    fn server(cert_file: Option<&str>, key_file: Option<&str>) -> HardblameConfig {
        HardblameConfig {
            apiserver: Some(ApiServerConfig {
                address: Some("127.0.0.1:8765".to_string()),
                apikey: Some("k".to_string()),
                cert_file: cert_file.map(str::to_string),
                key_file: key_file.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_server_without_tls_files_is_plain() {
        assert_eq!(server(None, None).server_settings().unwrap().tls, None);
    }

    #[test]
    fn test_server_tls_files_resolved() {
        let tls = server(Some("cert.pem"), Some("key.pem")).server_settings().unwrap().tls;
        assert_eq!(
            tls,
            Some(TlsFiles { cert_file: "cert.pem".to_string(), key_file: "key.pem".to_string() })
        );
    }

    #[test]
    fn test_server_cert_without_key_is_config_error() {
        match server(Some("cert.pem"), None).server_settings() {
            Err(HardblameError::Config(msg)) => assert!(msg.contains("key_file")),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_client_root_ca_optional() {
        let mut config = HardblameConfig {
            client: Some(ClientConfig {
                base_url: Some("https://127.0.0.1:8765/api/v1/".to_string()),
                apikey: Some("k".to_string()),
                root_ca: None,
            }),
            ..Default::default()
        };
        let settings = config.client_settings().unwrap();
        assert_eq!(settings.base_url, "https://127.0.0.1:8765/api/v1");
        assert_eq!(settings.root_ca, None);

        if let Some(c) = config.client.as_mut() {
            c.root_ca = Some("ca.pem".to_string());
        }
        assert_eq!(config.client_settings().unwrap().root_ca.as_deref(), Some("ca.pem"));
    }
}
