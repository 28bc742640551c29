//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Origin of the students REST backend, without a trailing slash.
    pub backend_url: String,
    pub backend_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STUDENTS_BACKEND_URL`: default `http://127.0.0.1:8080`
    /// - `BACKEND_TIMEOUT_SECS`: default 10, must be positive
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                reason: "expected a port number",
            })?,
            None => DEFAULT_PORT,
        };

        let backend_url = match lookup("STUDENTS_BACKEND_URL") {
            Some(raw) => parse_backend_url(&raw)?,
            None => DEFAULT_BACKEND_URL.to_owned(),
        };

        let backend_timeout_secs = match lookup("BACKEND_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "BACKEND_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}

fn parse_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());
    if !has_scheme || !has_host {
        return Err(ConfigError::Invalid {
            var: "STUDENTS_BACKEND_URL",
            value: raw.to_owned(),
            reason: "expected an http:// or https:// origin",
        });
    }
    Ok(trimmed.to_owned())
}
