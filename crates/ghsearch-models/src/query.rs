use std::fmt::Display;

use crate::InputEvent;

/// Search query, the trimmed value of the search field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query(String);

impl Query {
    /// Build a query from a raw field value.
    pub fn new<T: AsRef<str>>(raw: T) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Check if there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Query as str.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<&InputEvent> for Query {
    fn from(event: &InputEvent) -> Self {
        Self::new(event.value())
    }
}
