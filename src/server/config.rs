use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// Directory progress photo files are stored under.
    pub upload_dir: PathBuf,
    /// Whether the session cookie carries the `Secure` attribute.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            session_secure: match std::env::var("SESSION_SECURE") {
                Ok(value) => parse_bool("SESSION_SECURE", &value)?,
                Err(_) => false,
            },
        })
    }
}

/// Parses a boolean flag from an environment variable value.
///
/// Accepts `true` or `false`, ignoring case and surrounding whitespace.
///
/// # Returns
/// - `Ok(bool)` - Parsed flag
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a recognised boolean
fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_true_and_false() {
        assert!(parse_bool("SESSION_SECURE", "true").unwrap());
        assert!(parse_bool("SESSION_SECURE", " TRUE ").unwrap());
        assert!(!parse_bool("SESSION_SECURE", "false").unwrap());
    }

    #[test]
    fn rejects_other_boolean_spellings() {
        for value in ["1", "0", "yes", "no"] {
            assert!(parse_bool("SESSION_SECURE", value).is_err(), "{}", value);
        }
    }

    #[test]
    fn rejects_unknown_boolean() {
        let err = parse_bool("SESSION_SECURE", "sometimes").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar { ref name, ref value, .. }
                if name == "SESSION_SECURE" && value == "sometimes"
        ));
    }
}
