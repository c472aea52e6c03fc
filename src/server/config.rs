use crate::server::error::{config::ConfigError, AppError};

/// Runtime configuration read from the environment.
///
/// `.env` files are loaded by `dotenvy` in `main` before this is built.
pub struct Config {
    pub database_url: String,

    pub b2_key_id: String,
    pub b2_application_key: String,
    pub b2_bucket_id: String,
    pub b2_bucket_name: String,

    /// Optional 6-field cron expression for the background storage sync.
    pub sync_schedule: Option<String>,
    /// Whether session cookies are flagged `Secure`.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            b2_key_id: required("B2_KEY_ID")?,
            b2_application_key: required("B2_APPLICATION_KEY")?,
            b2_bucket_id: required("B2_BUCKET_ID")?,
            b2_bucket_name: required("B2_BUCKET_NAME")?,
            sync_schedule: optional("SYNC_SCHEDULE"),
            session_secure: parse_bool("SESSION_SECURE", optional("SESSION_SECURE"))?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating blank values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_bool(name: &str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(false),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boolean_flags() {
        assert!(!parse_bool("SESSION_SECURE", None).unwrap());
        assert!(parse_bool("SESSION_SECURE", Some("TRUE".to_string())).unwrap());
        assert!(!parse_bool("SESSION_SECURE", Some("0".to_string())).unwrap());
        assert!(matches!(
            parse_bool("SESSION_SECURE", Some("maybe".to_string())),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
