use async_trait::async_trait;

use crate::config::HardenizeSettings;
use crate::errors::HardblameError;
use super::client::HardenizeClient;

/// The upstream payloads the scoring pipeline consumes, returned raw so they
/// can be archived before they are parsed.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Body of the `groups` endpoint.
    async fn group_list(&self) -> Result<Vec<u8>, HardblameError>;

    /// JSON report for one group.
    async fn group_report(&self, group_id: &str) -> Result<Vec<u8>, HardblameError>;

    /// CSV host export for one group.
    async fn group_csv(&self, group_id: &str) -> Result<String, HardblameError>;
}

/// Produces a logged-in [`ScoreSource`] for each pipeline run.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn ScoreSource>, HardblameError>;
}

/// Connects by logging in to the Hardenize web interface.
pub struct HardenizeConnector {
    settings: HardenizeSettings,
}

impl HardenizeConnector {
    pub fn new(settings: HardenizeSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl Connector for HardenizeConnector {
    async fn connect(&self) -> Result<Box<dyn ScoreSource>, HardblameError> {
        let client = HardenizeClient::login(self.settings.clone()).await?;
        Ok(Box::new(client))
    }
}
