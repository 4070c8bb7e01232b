//! Validation utilities.

use std::fmt::Write;

use ghsearch_config::{ApiDriver, Config};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Only the GitHub driver talks to the network
    if config.api.driver == ApiDriver::GitHub {
        let root_url = &config.api.github.root_url;
        if root_url.is_empty() {
            _missing(&mut error, "GHSEARCH_API_GITHUB_ROOT_URL");
        } else if !root_url.starts_with("http://") && !root_url.starts_with("https://") {
            _invalid(
                &mut error,
                "GHSEARCH_API_GITHUB_ROOT_URL",
                "expected an http(s) URL",
            );
        }

        if config.api.github.connect_timeout == 0 {
            _invalid(
                &mut error,
                "GHSEARCH_API_GITHUB_CONNECT_TIMEOUT",
                "must be greater than zero",
            );
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
