//! Process configuration, read from the environment.
//!
//! | variable           | default   | meaning                                  |
//! |--------------------|-----------|------------------------------------------|
//! | `PORT`             | `1234`    | listen port                              |
//! | `HOST`             | `0.0.0.0` | bind address                             |
//! | `MOVIES_SEED_PATH` | unset     | seed JSON file; compiled-in seed if unset |
//! | `LOG_JSON`         | `false`   | JSON log lines instead of plain text     |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 1234;

/// Error type for configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_path: None,
            log_json: false,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let host = match var("HOST") {
            Some(raw) => raw.trim().parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: raw,
            })?,
            None => defaults.host,
        };

        let log_json = match var("LOG_JSON") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                name: "LOG_JSON",
                value: raw,
            })?,
            None => defaults.log_json,
        };

        Ok(Self {
            host,
            port,
            seed_path: var("MOVIES_SEED_PATH").map(PathBuf::from),
            log_json,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
