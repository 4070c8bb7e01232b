use ghsearch_models::Query;
use tracing::{debug, warn};

use crate::DomainError;

/// Diagnostics emitted by the pipeline.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait PipelineReporter: Send + Sync {
    /// A non-empty query passed debounce and deduplication.
    fn query_emitted(&self, query: &Query);
    /// The field was cleared.
    fn query_reset(&self);
    /// A search request failed.
    fn request_failed(&self, query: &Query, error: &DomainError);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl PipelineReporter for TracingReporter {
    fn query_emitted(&self, query: &Query) {
        debug!(query = %query, "Searching users");
    }

    fn query_reset(&self) {
        debug!("Query reset");
    }

    fn request_failed(&self, query: &Query, error: &DomainError) {
        warn!(query = %query, error = %error, "User search failed");
    }
}
