use std::net::SocketAddr;
use std::sync::atomic::Ordering;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use chrono::Local;
use tracing::debug;

use crate::api::models::{PingPost, PingResponse};
use crate::api::AppState;

pub async fn ping(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Json(post): Json<PingPost>,
) -> Json<PingResponse> {
    let pongs = state.pongs.fetch_add(1, Ordering::SeqCst) + 1;
    let client = connect_info
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    debug!(%client, pings = post.pings, pongs, "Ping");

    Json(PingResponse {
        time: Local::now(),
        message: format!("Pong from {}", state.hostname),
        client,
        pings: post.pings.saturating_add(1),
        pongs,
    })
}
