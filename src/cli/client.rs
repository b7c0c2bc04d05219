use reqwest::{Certificate, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::api::auth::API_KEY_HEADER;
use crate::config::ClientSettings;
use crate::errors::HardblameError;

/// JSON client for the hardblame API server.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    apikey: String,
}

fn load_root_ca(path: &str) -> Result<Certificate, HardblameError> {
    let pem = std::fs::read(path)
        .map_err(|e| HardblameError::Config(format!("Cannot read client.root_ca {}: {}", path, e)))?;
    Certificate::from_pem(&pem)
        .map_err(|e| HardblameError::Config(format!("Invalid PEM in client.root_ca {}: {}", path, e)))
}

impl ApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, HardblameError> {
        let mut builder = reqwest::Client::builder();
        if let Some(path) = &settings.root_ca {
            builder = builder.add_root_certificate(load_root_ca(path)?);
        }
        let http = builder
            .build()
            .map_err(|e| HardblameError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: settings.base_url,
            apikey: settings.apikey,
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, HardblameError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!(%url, "POST");
        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.apikey)
            .json(body)
            .send()
            .await
            .map_err(|e| HardblameError::Network(format!("Failed to reach {}: {}", url, e)))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED => Err(HardblameError::Authentication(format!(
                "{} rejected the API key",
                url
            ))),
            status if !status.is_success() => {
                let text = resp.text().await.unwrap_or_default();
                Err(HardblameError::Upstream(format!("{} returned {}: {}", url, status, text)))
            }
            _ => resp
                .json::<R>()
                .await
                .map_err(|e| HardblameError::Upstream(format!("Invalid response from {}: {}", url, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(root_ca: Option<String>) -> ClientSettings {
        ClientSettings {
            base_url: "https://127.0.0.1:8765/api/v1".to_string(),
            apikey: "k".to_string(),
            root_ca,
        }
    }

    #[test]
    fn test_url_joins_endpoint() {
        let client = ApiClient::new(settings(None)).unwrap();
        assert_eq!(client.url("/ping"), "https://127.0.0.1:8765/api/v1/ping");
    }

    #[test]
    fn test_missing_root_ca_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ca.pem").display().to_string();
        match ApiClient::new(settings(Some(path))) {
            Err(HardblameError::Config(msg)) => assert!(msg.contains("client.root_ca")),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }
}
