use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::config::credentials::redact_credentials;
use crate::config::HardenizeSettings;
use crate::errors::HardblameError;
use super::login::extract_hidden_fields;
use super::source::ScoreSource;

/// Logged-in session against Hardenize. The web client carries the session
/// cookie for CSV exports; API calls use HTTP Basic auth.
pub struct HardenizeClient {
    web: Client,
    api: Client,
    settings: HardenizeSettings,
}

impl HardenizeClient {
    /// Scrape the sign-in form's hidden fields and post them back together with
    /// the web credentials. Any non-200 answer aborts.
    pub async fn login(settings: HardenizeSettings) -> Result<Self, HardblameError> {
        let web = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| HardblameError::Network(format!("Failed to build web client: {}", e)))?;

        info!(url = %settings.login_url, "Logging in to Hardenize web interface");
        let resp = web.get(&settings.login_url).send().await
            .map_err(|e| HardblameError::Network(format!("Could not get login page: {}", e)))?;
        if resp.status() != StatusCode::OK {
            return Err(HardblameError::Authentication(format!(
                "Could not get login page. StatusCode: {}",
                resp.status().as_u16()
            )));
        }
        let page = resp.text().await
            .map_err(|e| HardblameError::Network(format!("Could not read login page: {}", e)))?;

        let mut form = extract_hidden_fields(&page);
        debug!(hidden_fields = form.len(), "Scraped login form");
        form.retain(|(k, _)| !matches!(k.as_str(), "email" | "password" | "submitButton"));
        form.push(("email".to_string(), settings.web_user.clone()));
        form.push(("password".to_string(), settings.web_passwd.clone()));
        form.push(("submitButton".to_string(), "Submit".to_string()));

        let resp = web.post(&settings.login_url).form(&form).send().await
            .map_err(|e| HardblameError::Network(redact_credentials(
                &format!("Login request failed: {}", e),
                &[&settings.web_passwd],
            )))?;
        if resp.status() != StatusCode::OK {
            return Err(HardblameError::Authentication(format!(
                "Logging in. StatusCode: {}",
                resp.status().as_u16()
            )));
        }
        info!(user = %settings.web_user, "Logged in to Hardenize");

        Ok(Self { web, api: Client::new(), settings })
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", self.settings.api_url, self.settings.organisation, endpoint)
    }

    pub fn csv_url(&self, group_id: &str) -> String {
        format!(
            "{}/org/{}/hosts/{}?format=csv",
            self.settings.web_url, self.settings.organisation, group_id
        )
    }

    /// GET an organisation API endpoint with Basic auth.
    pub async fn get_api_data(&self, endpoint: &str) -> Result<Vec<u8>, HardblameError> {
        let url = self.api_url(endpoint);
        debug!(url = %url, "GET api data");

        let resp = self.api.get(&url)
            .basic_auth(&self.settings.user, Some(&self.settings.passwd))
            .send()
            .await
            .map_err(|e| HardblameError::Network(format!("Getting {}: {}", url, e)))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(HardblameError::Upstream(format!("HTTP {} getting {}", status, url)));
        }
        let body = resp.bytes().await
            .map_err(|e| HardblameError::Network(format!("Reading {}: {}", url, e)))?;
        Ok(body.to_vec())
    }

    /// GET a group's CSV export over the logged-in web session.
    pub async fn get_csv(&self, group_id: &str) -> Result<String, HardblameError> {
        let url = self.csv_url(group_id);
        debug!(url = %url, "GET csv export");

        let resp = self.web.get(&url).send().await
            .map_err(|e| HardblameError::Network(format!("Web client failed: {}", e)))?;
        if resp.status() != StatusCode::OK {
            return Err(HardblameError::Upstream(format!("HTTP {} getting {}", resp.status(), url)));
        }
        resp.text().await
            .map_err(|e| HardblameError::Network(format!("Reading {}: {}", url, e)))
    }
}

#[async_trait]
impl ScoreSource for HardenizeClient {
    async fn group_list(&self) -> Result<Vec<u8>, HardblameError> {
        self.get_api_data("groups").await
    }

    async fn group_report(&self, group_id: &str) -> Result<Vec<u8>, HardblameError> {
        self.get_api_data(&format!("reports0?group={}&format=json", group_id)).await
    }

    async fn group_csv(&self, group_id: &str) -> Result<String, HardblameError> {
        self.get_csv(group_id).await
    }
}
