use crate::api::models::{HardenizePost, HardenizeResponse};
use crate::cli::client::ApiClient;
use crate::cli::commands::HardenizeArgs;
use crate::config::HardblameConfig;
use crate::errors::HardblameError;

pub async fn handle_hardenize(config: &HardblameConfig, args: HardenizeArgs) -> Result<(), HardblameError> {
    let client = ApiClient::new(config.client_settings()?)?;
    let post = HardenizePost { command: args.command.as_str().to_string() };
    let resp: HardenizeResponse = client.post("hardenize", &post).await?;

    if let Some(error) = resp.error {
        return Err(HardblameError::Upstream(error));
    }
    println!("{}", resp.message);
    Ok(())
}
