//! Server settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default planning deadline (milliseconds).
const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Errors in server settings.
#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid TRIP_PLANNER_ADDR {value:?}: {source}")]
    Addr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid TRIP_PLANNER_TIMEOUT_MS {value:?}: {source}")]
    Timeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Settings for the HTTP server binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Path to the JSON stop catalog, if any
    pub catalog_path: Option<PathBuf>,

    /// Time allowed for one plan
    pub plan_timeout: Duration,
}

impl ServerConfig {
    /// Read settings from `TRIP_PLANNER_*` environment variables.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let addr_value = lookup("TRIP_PLANNER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value
            .parse()
            .map_err(|source| ServerConfigError::Addr {
                value: addr_value.clone(),
                source,
            })?;

        let catalog_path = lookup("TRIP_PLANNER_CATALOG")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let plan_timeout = match lookup("TRIP_PLANNER_TIMEOUT_MS") {
            Some(value) => {
                let ms: u64 = value
                    .parse()
                    .map_err(|source| ServerConfigError::Timeout {
                        value: value.clone(),
                        source,
                    })?;
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        Ok(Self {
            addr,
            catalog_path,
            plan_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert!(config.catalog_path.is_none());
        assert_eq!(config.plan_timeout, Duration::from_millis(2000));
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("TRIP_PLANNER_ADDR", "0.0.0.0:8080"),
            ("TRIP_PLANNER_CATALOG", "/data/stops.json"),
            ("TRIP_PLANNER_TIMEOUT_MS", "500"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/stops.json")));
        assert_eq!(config.plan_timeout, Duration::from_millis(500));
    }

    #[test]
    fn invalid_values() {
        let err =
            ServerConfig::from_lookup(lookup(&[("TRIP_PLANNER_ADDR", "nowhere")])).unwrap_err();
        assert!(matches!(err, ServerConfigError::Addr { .. }));

        let err =
            ServerConfig::from_lookup(lookup(&[("TRIP_PLANNER_TIMEOUT_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("soon"));
    }
}
