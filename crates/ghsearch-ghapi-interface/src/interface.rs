use async_trait::async_trait;

use crate::{types::GhSearchUser, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Search users matching a query, best match first.
    async fn users_search(&self, query: &str) -> Result<Vec<GhSearchUser>>;
}
