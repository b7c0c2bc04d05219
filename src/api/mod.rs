pub mod auth;
pub mod errors;
pub mod models;
pub mod routes;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::hardenize::Connector;
use crate::pipeline::RunOptions;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub apikey: Arc<String>,
    pub connector: Arc<dyn Connector>,
    pub options: RunOptions,
    pub pongs: Arc<AtomicU64>,
    /// Held for the duration of a pipeline run.
    pub run_lock: Arc<Mutex<()>>,
    pub hostname: String,
}

pub fn create_app_state(
    db: Database,
    apikey: impl Into<String>,
    connector: Arc<dyn Connector>,
    options: RunOptions,
) -> AppState {
    AppState {
        db,
        apikey: Arc::new(apikey.into()),
        connector,
        options,
        pongs: Arc::new(AtomicU64::new(0)),
        run_lock: Arc::new(Mutex::new(())),
        hostname: local_hostname(),
    }
}

fn local_hostname() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "hardblame".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ping", post(routes::ping::ping))
        .route("/hardenize", post(routes::hardenize::hardenize))
        .route("/group", post(routes::group::group))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::api_key_middleware));

    Router::new()
        .route("/", get(routes::home))
        .nest("/api/v1", api)
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
