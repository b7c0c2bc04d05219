/// A Hardenize per-feature verdict as it appears in CSV and JSON exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Good,
    Neutral,
    Warning,
    Error,
    /// Anything else, including empty cells.
    Unknown,
}

impl Status {
    pub fn parse(value: &str) -> Self {
        match value {
            "good" => Self::Good,
            "neutral" => Self::Neutral,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Unknown,
        }
    }

    pub fn points(&self) -> i64 {
        match self {
            Self::Good => 1,
            Self::Neutral => 0,
            Self::Warning => -1,
            Self::Error => -2,
            Self::Unknown => 0,
        }
    }
}

/// Points for a raw status string.
pub fn points(value: &str) -> i64 {
    Status::parse(value).points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(points("good"), 1);
        assert_eq!(points("neutral"), 0);
        assert_eq!(points("warning"), -1);
        assert_eq!(points("error"), -2);
    }

    #[test]
    fn test_unknown_status_scores_zero() {
        assert_eq!(points(""), 0);
        assert_eq!(points("Good"), 0);
        assert_eq!(points("n/a"), 0);
        assert_eq!(Status::parse("fatal"), Status::Unknown);
    }

    #[test]
    fn test_status_match_is_exact() {
        assert_eq!(Status::parse(" warning"), Status::Unknown);
        assert_eq!(points("good "), 0);
    }
}
