use ghsearch_ghapi_interface::ApiError;
use reqwest::StatusCode;

/// Errors raised while talking to GitHub.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("GitHub API error ({status}): {message}")]
    StatusError { status: StatusCode, message: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::HttpError { source } if source.is_decode() => {
                ApiError::request_failure(format!("Malformed response from GitHub: {source}"))
            }
            GitHubError::HttpError { source } if source.is_timeout() => {
                ApiError::request_failure(format!("GitHub did not answer in time: {source}"))
            }
            e => ApiError::request_failure(e.to_string()),
        }
    }
}
