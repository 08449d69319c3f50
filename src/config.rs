//! Service configuration loaded from environment variables.

use std::error::Error;
use std::fmt;

/// Top-level configuration for the video server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    pub http: HttpConfig,
}

/// Options that shape the HTTP router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// Basic-auth credentials; `None` leaves every route open.
    pub auth: Option<Credentials>,
    pub asset: StaticAsset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// A single file served verbatim at a fixed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAsset {
    pub route: String,
    pub path: String,
}

impl Default for StaticAsset {
    fn default() -> Self {
        StaticAsset {
            route: "/sickfifaclip".to_string(),
            path: "./resources/fifaclip.mp4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    Invalid { key: &'static str, value: String },
    /// A setting needs a companion variable that is missing.
    Incomplete(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
            ConfigError::Incomplete(msg) => write!(f, "incomplete configuration: {}", msg),
        }
    }
}

impl Error for ConfigError {}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("VIDEOS_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "VIDEOS_PORT",
                value,
            })?,
            None => 8080,
        };

        let auth = match (lookup("VIDEOS_AUTH_USER"), lookup("VIDEOS_AUTH_PASSWORD")) {
            (Some(user), Some(password)) => Some(Credentials { user, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::Incomplete(
                    "VIDEOS_AUTH_USER is set without VIDEOS_AUTH_PASSWORD".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete(
                    "VIDEOS_AUTH_PASSWORD is set without VIDEOS_AUTH_USER".to_string(),
                ))
            }
        };

        let defaults = StaticAsset::default();
        let asset = StaticAsset {
            route: lookup("VIDEOS_STATIC_ROUTE").unwrap_or(defaults.route),
            path: lookup("VIDEOS_STATIC_FILE").unwrap_or(defaults.path),
        };
        if !valid_asset_route(&asset.route) {
            return Err(ConfigError::Invalid {
                key: "VIDEOS_STATIC_ROUTE",
                value: asset.route,
            });
        }

        Ok(Config {
            host: lookup("VIDEOS_HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            http: HttpConfig { auth, asset },
        })
    }

    /// `host:port`, suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Asset routes must be absolute, literal, and outside the `/videos` group.
fn valid_asset_route(route: &str) -> bool {
    let reserved = route == "/videos" || route.starts_with("/videos/");
    route.starts_with('/') && !reserved && !route.contains([':', '*'])
}
