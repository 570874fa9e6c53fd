//! Server configuration loaded from environment variables.

use std::env;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub host: String,
    /// Port the listener binds to.
    pub port: u16,
    /// Origins allowed by the CORS layer. Empty means same-origin only.
    pub cors_origins: Vec<String>,
    /// Seconds before an in-flight request is aborted.
    pub request_timeout_secs: u64,
    /// Token signing settings.
    pub jwt: JwtConfig,
}

/// Settings for issuing and validating access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret used to sign tokens.
    pub secret: String,
    /// Minutes until a freshly issued token expires.
    pub access_token_expiry_mins: i64,
}

impl ServerConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Returns an error when `JWT_SECRET` is unset or a numeric variable
    /// fails to parse. Everything else falls back to a local-dev default.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("SERVER_PORT", 8080)?;
        let cors_origins = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30)?;

        let secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set".to_string())?;
        let access_token_expiry_mins = parse_var("JWT_ACCESS_EXPIRY_MINS", 1440)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig {
                secret,
                access_token_expiry_mins,
            },
        })
    }

    /// `host:port` string suitable for a TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
