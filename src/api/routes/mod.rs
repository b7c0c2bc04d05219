pub mod group;
pub mod hardenize;
pub mod ping;

use axum::{http::StatusCode, Json};

use super::models::NotFoundResponse;

pub async fn home() -> &'static str {
    "Welcome home!"
}

pub async fn not_found() -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            status: 404,
            message: "These are not the droids you're looking for".to_string(),
        }),
    )
}
