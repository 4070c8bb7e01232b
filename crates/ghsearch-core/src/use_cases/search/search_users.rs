use async_trait::async_trait;
use ghsearch_ghapi_interface::types::GhSearchUser;
use ghsearch_models::{Query, SearchResult, UiState};

use crate::{CoreContext, Result};

#[async_trait]
pub trait SearchUsersInterface: Send + Sync {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, query: &Query) -> Result<Vec<SearchResult>>;
}

pub struct SearchUsers;

#[async_trait]
impl SearchUsersInterface for SearchUsers {
    #[tracing::instrument(skip(self, ctx), fields(query = %query))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, query: &Query) -> Result<Vec<SearchResult>> {
        Ok(ctx
            .api_service
            .users_search(query.as_str())
            .await?
            .into_iter()
            .map(Self::to_search_result)
            .collect())
    }
}

impl SearchUsers {
    fn to_search_result(user: GhSearchUser) -> SearchResult {
        SearchResult {
            id: user.id,
            login: user.login,
            avatar_url: user.avatar_url,
        }
    }

    /// Turn a search outcome into what the result area should show.
    pub fn resolve_state(result: Result<Vec<SearchResult>>) -> UiState {
        match result {
            Ok(users) if users.is_empty() => UiState::Empty,
            Ok(users) => UiState::Results(users),
            Err(e) => UiState::Error(e.to_string()),
        }
    }
}
