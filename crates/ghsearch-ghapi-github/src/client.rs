//! HTTP client setup.

use std::time::Duration;

use ghsearch_config::Config;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    ClientBuilder,
};

use crate::errors::GitHubError;

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("ghsearch/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}
