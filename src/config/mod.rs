//! Configuration module for the FAQ search proxy.
//!
//! The upstream settings are required; everything else falls back to a default.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
/// Default upstream timeout in seconds.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Error raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    Missing(&'static str),
    /// A variable is set but cannot be parsed
    Invalid { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "Missing environment variable: {}", name),
            ConfigError::Invalid { name, value } => {
                write!(f, "Invalid value for {}: {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream search URL prefix; the translated query is appended to it
    pub api_base: String,
    /// Knowledge base instance id, sent upstream as `iid`
    pub site_id: String,
    /// Link handed to clients when a search finds nothing
    pub no_results_url: String,
    /// Prefix of the `module_link` returned with every search
    pub module_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Upper bound on a single upstream call
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let api_base = required("LIBANSWERS_API_BASE")?;
        let site_id = required("IID")?;
        let no_results_url = required("NO_RESULTS_URL")?;
        let module_url = required("MODULE_URL")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let debug = lookup("FAQ_DEBUG").is_some_and(|v| !v.is_empty());
        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level,
            None if debug => "debug".to_string(),
            None => "info".to_string(),
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "UPSTREAM_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base,
            site_id,
            no_results_url,
            module_url,
            bind_addr,
            log_level,
            upstream_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("LIBANSWERS_API_BASE", "https://faq.example.edu/api/1.1/search/"),
        ("IID", "1234"),
        ("NO_RESULTS_URL", "https://faq.example.edu/ask"),
        ("MODULE_URL", "https://faq.example.edu/search/?t=0&q="),
    ];

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.api_base, "https://faq.example.edu/api/1.1/search/");
        assert_eq!(config.site_id, "1234");
        assert_eq!(config.no_results_url, "https://faq.example.edu/ask");
        assert_eq!(config.module_url, "https://faq.example.edu/search/?t=0&q=");
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:5000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_each_required_variable_is_enforced() {
        for (missing, _) in REQUIRED {
            let pairs: Vec<_> = REQUIRED
                .iter()
                .copied()
                .filter(|(k, _)| *k != missing)
                .collect();
            let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
            assert_eq!(
                err.to_string(),
                format!("Missing environment variable: {}", missing)
            );
        }
    }

    #[test]
    fn test_debug_flag_lowers_default_level() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("FAQ_DEBUG", "1"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.log_level, "debug");

        pairs.push(("LOG_LEVEL", "warn"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_optional_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("BIND_ADDR", "127.0.0.1:8081"));
        pairs.push(("UPSTREAM_TIMEOUT_SECS", "3"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8081");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_optional_values() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("BIND_ADDR", "not-an-address"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));

        let mut pairs = REQUIRED.to_vec();
        pairs.push(("UPSTREAM_TIMEOUT_SECS", "soon"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                ..
            }
        ));
    }
}
