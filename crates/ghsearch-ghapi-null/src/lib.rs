//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use ghsearch_ghapi_interface::{types::GhSearchUser, ApiService, Result};

/// Null API service, never finds anybody.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn users_search(&self, query: &str) -> Result<Vec<GhSearchUser>> {
        Ok(vec![])
    }
}
