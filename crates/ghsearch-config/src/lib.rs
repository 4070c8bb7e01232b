//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Quiet period before a typed query is searched (in milliseconds).
    pub debounce_ms: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Query pipeline options.
    pub pipeline: PipelineConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Self::from_lookup(version, |name| env::var(name).ok())
    }

    pub fn from_env_no_version() -> Result<Config, DriverError> {
        Self::from_env("0.0.0".into())
    }

    fn from_lookup<F>(version: String, lookup: F) -> Result<Config, DriverError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str(&lookup, "GHSEARCH_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64(
                        &lookup,
                        "GHSEARCH_API_GITHUB_CONNECT_TIMEOUT",
                        5000,
                    ),
                    root_url: env_to_str(
                        &lookup,
                        "GHSEARCH_API_GITHUB_ROOT_URL",
                        "https://api.github.com",
                    ),
                },
            },
            pipeline: PipelineConfig {
                debounce_ms: env_to_u64(&lookup, "GHSEARCH_PIPELINE_DEBOUNCE_MS", 300),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool(&lookup, "GHSEARCH_LOGGING_USE_BUNYAN", false),
            },
            version,
        })
    }
}

fn env_to_u64<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: u64) -> u64 {
    lookup(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: bool) -> bool {
    lookup(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str, default: &str) -> String {
    lookup(name)
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}
