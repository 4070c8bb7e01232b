use serde::Serialize;

use crate::SearchResult;

/// What the result area shows.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum UiState {
    /// Nothing happened yet.
    #[default]
    Idle,
    /// A search is in flight.
    Loading,
    /// Users found.
    Results(Vec<SearchResult>),
    /// Empty query, or no user found.
    Empty,
    /// Search failed.
    Error(String),
}

impl UiState {
    /// Convert state kind to static str.
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Results(_) => "results",
            Self::Empty => "empty",
            Self::Error(_) => "error",
        }
    }

    /// Check if a search is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
