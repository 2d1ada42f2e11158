use std::str::FromStr;

/// Configuration problems found at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error(
        "INTAKE_TIMEOUT_SECS ({intake}) must be less than REQUEST_TIMEOUT_SECS ({request})"
    )]
    TimeoutOrder { intake: u64, request: u64 },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the intake endpoint has a local-development default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// URL the validated record is POSTed to. Required.
    pub intake_url: String,
    /// Timeout for the outbound intake request in seconds (default: `10`).
    pub intake_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `ONBOARD_URL`          | required  |
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `INTAKE_TIMEOUT_SECS`  | `10`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let intake_url = lookup("ONBOARD_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("ONBOARD_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", "u16", 3000)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30)?;
        let intake_timeout_secs = parse_or(&lookup, "INTAKE_TIMEOUT_SECS", "u64", 10)?;

        // A slow intake must surface as a banner, not as the router's 408.
        if intake_timeout_secs >= request_timeout_secs {
            return Err(ConfigError::TimeoutOrder {
                intake: intake_timeout_secs,
                request: request_timeout_secs,
            });
        }

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            intake_url,
            intake_timeout_secs,
        })
    }
}

fn parse_or<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
