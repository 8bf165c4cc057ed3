use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Artificial latency before a form submission reaches the store
    pub submit_delay: Duration,
    /// JSON file holding the initial portfolio
    pub seed_path: Option<PathBuf>,
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_env_files() {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => 8080,
        };

        let submit_delay_ms: u64 = match var("SUBMIT_DELAY_MS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "SUBMIT_DELAY_MS",
                expected: "a whole number of milliseconds",
                value: raw,
            })?,
            None => 0,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            environment: var("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            submit_delay: Duration::from_millis(submit_delay_ms),
            seed_path: var("PORTFOLIO_SEED_PATH").map(PathBuf::from),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.environment, "development");
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("RUST_ENV", "production"),
            ("SUBMIT_DELAY_MS", "500"),
            ("PORTFOLIO_SEED_PATH", "seed/portfolio.json"),
        ])
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.environment, "production");
        assert_eq!(config.submit_delay, Duration::from_millis(500));
        assert_eq!(config.seed_path, Some(PathBuf::from("seed/portfolio.json")));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn negative_delay_is_an_error() {
        let err = config_from(&[("SUBMIT_DELAY_MS", "-5")]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "SUBMIT_DELAY_MS must be a whole number of milliseconds, got '-5'"
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("PORTFOLIO_SEED_PATH", "  "), ("PORT", "")]).unwrap();

        assert!(config.seed_path.is_none());
        assert_eq!(config.port, 8080);
    }
}
