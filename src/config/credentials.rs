use tracing::{debug, warn};

/// Resolve a config value. A leading `$` names an environment variable; an
/// unset variable resolves to the empty string so required-field checks fail.
pub fn resolve_credential(value: &str) -> String {
    match value.strip_prefix('$') {
        Some(var_name) => match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved config value from environment");
                resolved
            }
            Err(_) => {
                warn!(var = %var_name, "Environment variable not set");
                String::new()
            }
        },
        None => value.to_string(),
    }
}

/// Mask secrets before text reaches a log line or an API response.
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    secrets
        .iter()
        .filter(|s| s.len() >= 4)
        .fold(text.to_string(), |acc, secret| acc.replace(secret, "[REDACTED]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_credential_literal() {
        assert_eq!(resolve_credential("plain-value"), "plain-value");
    }

    #[test]
    fn test_resolve_credential_env_var() {
        std::env::set_var("TEST_HARDBLAME_CRED", "s3cret");
        assert_eq!(resolve_credential("$TEST_HARDBLAME_CRED"), "s3cret");
        std::env::remove_var("TEST_HARDBLAME_CRED");
    }

    #[test]
    fn test_resolve_credential_unset_env_var_is_empty() {
        assert_eq!(resolve_credential("$NONEXISTENT_HARDBLAME_VAR"), "");
    }

    #[test]
    fn test_redact_credentials() {
        let text = "login failed for me@example.org with hunter22";
        let redacted = redact_credentials(text, &["hunter22", "me"]);
        assert_eq!(redacted, "login failed for me@example.org with [REDACTED]");
    }
}
