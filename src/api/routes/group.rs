use axum::{extract::State, Json};
use chrono::Local;
use tracing::{info, warn};

use crate::api::models::{GroupPost, GroupResponse};
use crate::api::AppState;
use crate::reporting::day_stamp;

pub async fn group(State(state): State<AppState>, Json(post): Json<GroupPost>) -> Json<GroupResponse> {
    match post.command.as_str() {
        "count" => {
            let day = day_stamp(Local::now().date_naive());
            match state.db.group_count(&day) {
                Ok(counts) => {
                    info!(%day, groups = counts.len(), "Group count");
                    Json(GroupResponse {
                        time: Local::now(),
                        message: format!("Host counts per group for {}", day),
                        counts,
                        error: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Group count failed");
                    Json(GroupResponse::failed(e.to_string()))
                }
            }
        }
        other => Json(GroupResponse::failed(format!("Unknown group command: {}", other))),
    }
}
