use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::errors::HardblameError;
use super::models::ErrorResponse;

impl HardblameError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HardblameError::Authentication(_) => StatusCode::UNAUTHORIZED,
            HardblameError::Busy(_) => StatusCode::CONFLICT,
            HardblameError::Config(_) | HardblameError::Yaml(_) => StatusCode::BAD_REQUEST,
            HardblameError::Upstream(_) | HardblameError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HardblameError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HardblameError::Authentication("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(HardblameError::Busy("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(HardblameError::Upstream("x".into()).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(HardblameError::Database("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
