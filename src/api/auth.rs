use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::HardblameError;
use super::AppState;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Reject any request whose `X-API-Key` header differs from the configured key.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, HardblameError> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if !state.apikey.is_empty() && key == state.apikey.as_str() => Ok(next.run(request).await),
        Some(_) => {
            warn!(path = %request.uri().path(), "Rejected request with wrong API key");
            Err(HardblameError::Authentication("Invalid API key".to_string()))
        }
        None => {
            warn!(path = %request.uri().path(), "Rejected request without API key");
            Err(HardblameError::Authentication(format!("Missing {} header", API_KEY_HEADER)))
        }
    }
}
