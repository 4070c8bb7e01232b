use serde::{Deserialize, Serialize};

/// One GitHub user record from a search.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// User ID.
    pub id: u64,
    /// Username.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
}
