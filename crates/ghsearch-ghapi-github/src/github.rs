//! GitHub adapter

use async_trait::async_trait;
use ghsearch_config::Config;
use ghsearch_ghapi_interface::{
    types::{GhSearchUser, GhSearchUsersResponse},
    ApiService, Result,
};
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::{
    client::{build_github_url, get_anonymous_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
    client: Client,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Result<Self, GitHubError> {
        let client = get_anonymous_client_builder(&config)?.build()?;
        Ok(Self { config, client })
    }

    fn build_url<T: Into<String>>(&self, path: T) -> String {
        build_github_url(&self.config, path)
    }

    async fn check_status(response: Response) -> Result<Response, GitHubError> {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error) => error.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status.canonical_reason().unwrap_or("no details").to_string(),
        };

        Err(GitHubError::StatusError { status, message })
    }

    async fn fetch_users(&self, query: &str) -> Result<Vec<GhSearchUser>, GitHubError> {
        let response = self
            .client
            .get(self.build_url("/search/users"))
            .query(&[("q", query)])
            .send()
            .await?;

        Ok(Self::check_status(response)
            .await?
            .json::<GhSearchUsersResponse>()
            .await?
            .items)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), err)]
    async fn users_search(&self, query: &str) -> Result<Vec<GhSearchUser>> {
        let users = self.fetch_users(query).await?;
        tracing::debug!(count = users.len(), "Users found");
        Ok(users)
    }
}
