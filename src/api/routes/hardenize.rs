use axum::{extract::State, Json};
use tracing::{error, info, warn};

use crate::api::models::{HardenizePost, HardenizeResponse};
use crate::api::AppState;
use crate::errors::HardblameError;
use crate::pipeline::{Pipeline, RunSummary};
use crate::reporting::formatter::format_ranking_summary;

pub async fn hardenize(State(state): State<AppState>, Json(post): Json<HardenizePost>) -> Json<HardenizeResponse> {
    let dry_run = match post.command.as_str() {
        "fetch" => false,
        "test" => true,
        other => {
            return Json(HardenizeResponse::failed(format!("Unknown hardenize command: {}", other)));
        }
    };

    let Ok(_guard) = state.run_lock.try_lock() else {
        warn!(command = %post.command, "Rejected run while another is in flight");
        let err = HardblameError::Busy("a fetch is already running".to_string());
        return Json(HardenizeResponse::failed(err.to_string()));
    };

    info!(command = %post.command, "Hardenize run requested");
    match run(&state, dry_run).await {
        Ok(summary) => Json(HardenizeResponse::ok(describe(&summary))),
        Err(e) => {
            error!(error = %e, "Hardenize run failed");
            Json(HardenizeResponse::failed(e.to_string()))
        }
    }
}

async fn run(state: &AppState, dry_run: bool) -> Result<RunSummary, HardblameError> {
    let source = state.connector.connect().await?;
    let mut options = state.options.clone();
    options.dry_run = dry_run;
    Pipeline::new(source.as_ref(), Some(&state.db), options).run().await
}

fn describe(summary: &RunSummary) -> String {
    let mut message = match &summary.report_path {
        Some(path) => format!(
            "Fetched {} groups ({} hosts), report written to {}",
            summary.groups.len(),
            summary.host_count(),
            path.display()
        ),
        None => format!(
            "Test run scored {} groups ({} hosts), nothing written",
            summary.groups.len(),
            summary.host_count()
        ),
    };
    if summary.dry_run {
        message.push('\n');
        message.push_str(&format_ranking_summary(&summary.groups));
    }
    message
}
