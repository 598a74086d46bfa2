// config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_ORDER_API_BASE_URL: &str = "http://127.0.0.1:8080/api";
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub order_api_base_url: String,
    pub lookup_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key -> value source. Unset keys fall back
    /// to defaults; set-but-malformed keys are an error.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&get, "BIND_ADDR", DEFAULT_BIND_ADDR.to_string(), |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;

        let max_workers = parse_var(&get, "MAX_WORKERS", DEFAULT_MAX_WORKERS.to_string(), |v| {
            match v.parse::<usize>() {
                Ok(0) => Err("must be at least 1".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            }
        })?;

        let order_api_base_url = parse_var(
            &get,
            "ORDER_API_BASE_URL",
            DEFAULT_ORDER_API_BASE_URL.to_string(),
            |v| {
                let parsed = url::Url::parse(v).map_err(|e| e.to_string())?;
                match parsed.scheme() {
                    "http" | "https" => Ok(v.trim_end_matches('/').to_string()),
                    other => Err(format!("unsupported scheme {other}")),
                }
            },
        )?;

        let lookup_timeout = parse_var(
            &get,
            "LOOKUP_TIMEOUT_SECS",
            DEFAULT_LOOKUP_TIMEOUT_SECS.to_string(),
            |v| match v.parse::<u64>() {
                Ok(0) => Err("must be at least 1".to_string()),
                Ok(secs) => Ok(Duration::from_secs(secs)),
                Err(e) => Err(e.to_string()),
            },
        )?;

        Ok(Self {
            bind_addr,
            max_workers,
            order_api_base_url,
            lookup_timeout,
        })
    }
}

fn parse_var<F, T, P>(get: &F, var: &'static str, default: String, parse: P) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, String>,
{
    let value = get(var).unwrap_or(default);
    parse(value.trim()).map_err(|reason| ConfigError::Invalid {
        var,
        value,
        reason,
    })
}
