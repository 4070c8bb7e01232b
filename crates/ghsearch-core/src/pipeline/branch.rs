use ghsearch_models::Query;

/// Partition of deduplicated queries.
#[derive(Debug, PartialEq, Eq)]
pub enum Branch {
    /// Something to search for.
    NonEmpty(Query),
    /// Field cleared, or whitespace only.
    Empty,
}

impl Branch {
    pub fn of(query: Query) -> Self {
        if query.is_empty() {
            Self::Empty
        } else {
            Self::NonEmpty(query)
        }
    }
}
