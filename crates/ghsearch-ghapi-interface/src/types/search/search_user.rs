use serde::{Deserialize, Serialize};

/// GitHub user, as listed by the user search.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhSearchUser {
    /// User ID.
    pub id: u64,
    /// Username.
    pub login: String,
    /// Avatar URL.
    pub avatar_url: String,
}
