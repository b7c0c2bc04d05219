use tracing::info;

use crate::api::models::{PingPost, PingResponse};
use crate::cli::client::ApiClient;
use crate::cli::commands::PingArgs;
use crate::config::HardblameConfig;
use crate::errors::HardblameError;

pub async fn handle_ping(config: &HardblameConfig, args: PingArgs) -> Result<(), HardblameError> {
    let client = ApiClient::new(config.client_settings()?)?;

    let mut pings = 0;
    for _ in 0..args.count.max(1) {
        let resp: PingResponse = client.post("ping", &PingPost { pings }).await?;
        info!(client = %resp.client, "Ping answered");
        println!("{} pings: {} pongs: {} message: {}", resp.time.format("%H:%M:%S"), resp.pings, resp.pongs, resp.message);
        pings = resp.pings;
    }
    Ok(())
}
