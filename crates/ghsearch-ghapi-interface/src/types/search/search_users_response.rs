use serde::Deserialize;

use super::GhSearchUser;

/// Body of `GET /search/users`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhSearchUsersResponse {
    /// Total match count, across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Whether the search timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,
    /// First page of users.
    pub items: Vec<GhSearchUser>,
}
