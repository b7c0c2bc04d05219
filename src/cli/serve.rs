use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use tracing::{info, warn};

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{HardblameConfig, TlsFiles};
use crate::db::Database;
use crate::errors::HardblameError;
use crate::hardenize::HardenizeConnector;
use crate::pipeline::RunOptions;

pub async fn handle_serve(config: &HardblameConfig, args: ServeArgs) -> Result<(), HardblameError> {
    let mut server = config.server_settings()?;
    if let Some(address) = args.address {
        server.address = address;
    }
    let db_file = args.db.unwrap_or_else(|| config.db_file());
    let connector = HardenizeConnector::new(config.hardenize_settings()?);

    let db = Database::new(&db_file)?;
    if args.reset_db {
        warn!(db = %db_file, "Resetting database");
        db.reset()?;
    }

    let state = api::create_app_state(db, server.apikey, Arc::new(connector), RunOptions::from_config(config, false));
    let app = api::build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    match server.tls {
        Some(tls) => {
            let addr: SocketAddr = server.address.parse().map_err(|e| {
                HardblameError::Config(format!("Invalid apiserver.address {}: {}", server.address, e))
            })?;
            let rustls = load_tls(&tls).await?;
            info!(address = %addr, db = %db_file, cert = %tls.cert_file, "Listening (TLS)");
            axum_server::bind_rustls(addr, rustls)
                .serve(app)
                .await
                .map_err(|e| HardblameError::Internal(format!("Server error: {}", e)))?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(&server.address).await?;
            warn!(address = %server.address, "No apiserver.cert_file and key_file, serving plain HTTP");
            info!(address = %server.address, db = %db_file, "Listening");
            axum::serve(listener, app)
                .await
                .map_err(|e| HardblameError::Internal(format!("Server error: {}", e)))?;
        }
    }

    Ok(())
}

/// Read the PEM certificate chain and private key for HTTPS serving.
pub async fn load_tls(tls: &TlsFiles) -> Result<RustlsConfig, HardblameError> {
    RustlsConfig::from_pem_file(&tls.cert_file, &tls.key_file)
        .await
        .map_err(|e| {
            HardblameError::Config(format!(
                "Cannot load TLS certificate {} / key {}: {}",
                tls.cert_file, tls.key_file, e
            ))
        })
}
