use thiserror::Error;

#[derive(Debug, Error)]
pub enum HardblameError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Pipeline busy: {0}")]
    Busy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HardblameError {
    /// Process exit code used when this error ends a command.
    pub fn exit_code(&self) -> i32 {
        match self {
            HardblameError::Config(_) | HardblameError::Yaml(_) => 2,
            HardblameError::Upstream(_) | HardblameError::Network(_) => 3,
            HardblameError::Authentication(_) => 4,
            HardblameError::Schema(_) | HardblameError::Csv(_) | HardblameError::Json(_) => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(HardblameError::Config("x".into()).exit_code(), 2);
        assert_eq!(HardblameError::Upstream("x".into()).exit_code(), 3);
        assert_eq!(HardblameError::Authentication("x".into()).exit_code(), 4);
        assert_eq!(HardblameError::Schema("x".into()).exit_code(), 5);
        assert_eq!(HardblameError::Database("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_display_includes_category() {
        let err = HardblameError::Schema("Index to CSV is broken".into());
        assert_eq!(err.to_string(), "Schema error: Index to CSV is broken");
    }
}
