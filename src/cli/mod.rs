pub mod client;
pub mod commands;
pub mod fetch;
pub mod group;
pub mod hardenize;
pub mod ping;
pub mod serve;

use std::path::PathBuf;

use crate::config::{self, HardblameConfig};
use crate::errors::HardblameError;

pub use commands::{Cli, Commands};

/// Parse and check a config file, printing what each command would still miss.
pub async fn handle_validate(path: &str) -> Result<(), HardblameError> {
    let config = config::parse_config(&PathBuf::from(path)).await?;
    println!("Configuration is valid: {}", path);
    for (what, missing) in missing_sections(&config) {
        if let Some(e) = missing {
            println!("  {}: {}", what, e);
        }
    }
    Ok(())
}

fn missing_sections(config: &HardblameConfig) -> Vec<(&'static str, Option<HardblameError>)> {
    vec![
        ("fetch", config.hardenize_settings().err()),
        ("serve", config.server_settings().err()),
        ("client", config.client_settings().err()),
    ]
}
