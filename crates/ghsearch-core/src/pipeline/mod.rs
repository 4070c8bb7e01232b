//! Query pipeline.
//!
//! Turns raw input events from a search field into UI states:
//! debounce, extract and trim, deduplicate, branch on emptiness, then
//! either reset the result area or search users.
//!
//! In-flight requests are never cancelled. When a newer query resolves
//! before an older one, the older response still gets published last and
//! overwrites the newer results.

mod branch;
mod debounce;
mod distinct;
mod handle;
mod reporter;
mod sink;
#[cfg(test)]
mod tests;

use std::{sync::Arc, time::Duration};

use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, Stream},
    FutureExt, StreamExt,
};
use ghsearch_config::Config;
use ghsearch_ghapi_interface::ApiService;
use ghsearch_models::{InputEvent, Query, SearchResult, UiState};
use tokio::{
    sync::oneshot,
    time::{sleep_until, Instant},
};
use tracing::{debug, trace};

pub use self::{
    branch::Branch,
    debounce::Debouncer,
    distinct::DistinctUntilChanged,
    handle::PipelineHandle,
    reporter::{PipelineReporter, TracingReporter},
    sink::{UiStateCell, UiStateSink},
};
#[cfg(any(test, feature = "testkit"))]
pub use self::reporter::MockPipelineReporter;
use crate::{
    use_cases::search::{SearchUsers, SearchUsersInterface},
    CoreContext, Result,
};

type SearchOutcome = (Query, Result<Vec<SearchResult>>);

/// Query pipeline, ready to be spawned.
pub struct QueryPipeline {
    config: Arc<Config>,
    api_service: Arc<dyn ApiService>,
    reporter: Arc<dyn PipelineReporter>,
}

impl QueryPipeline {
    pub fn new(config: Arc<Config>, api_service: Arc<dyn ApiService>) -> Self {
        Self {
            config,
            api_service,
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn PipelineReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Quiet period applied to input events.
    pub fn debounce_period(&self) -> Duration {
        Duration::from_millis(self.config.pipeline.debounce_ms)
    }

    /// Start consuming `events` on the tokio runtime, publishing to `sink`.
    pub fn spawn<S, K>(self, events: S, sink: K) -> PipelineHandle
    where
        S: Stream<Item = InputEvent> + Send + 'static,
        K: UiStateSink + 'static,
    {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(events, sink, shutdown_rx));

        PipelineHandle::new(shutdown_tx, task)
    }

    async fn run<S, K>(self, events: S, sink: K, mut shutdown: oneshot::Receiver<()>)
    where
        S: Stream<Item = InputEvent> + Send + 'static,
        K: UiStateSink + 'static,
    {
        let mut events = Box::pin(events);
        let mut debouncer = Debouncer::new(self.debounce_period());
        let mut distinct = DistinctUntilChanged::default();
        let mut in_flight: FuturesUnordered<BoxFuture<'static, SearchOutcome>> =
            FuturesUnordered::new();
        let mut input_closed = false;

        debug!(debounce = ?self.debounce_period(), "Pipeline started");

        loop {
            if input_closed && !debouncer.is_pending() && in_flight.is_empty() {
                debug!("Input ended, pipeline completed");
                break;
            }

            let deadline = debouncer.deadline();

            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    debug!(in_flight = in_flight.len(), "Pipeline torn down");
                    break;
                }

                Some((query, result)) = in_flight.next(), if !in_flight.is_empty() => {
                    self.complete(&sink, &query, result);
                }

                event = events.next(), if !input_closed => match event {
                    Some(event) => {
                        trace!(value = event.value(), "Input event");
                        debouncer.push(event, Instant::now());
                    }
                    None => {
                        input_closed = true;
                        if let Some(event) = debouncer.flush() {
                            self.emit(&sink, &mut distinct, &mut in_flight, &event);
                        }
                    }
                },

                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(event) = debouncer.take_ready(Instant::now()) {
                        self.emit(&sink, &mut distinct, &mut in_flight, &event);
                    }
                }
            }
        }
    }

    /// Extract, deduplicate and branch a debounced event.
    fn emit<K: UiStateSink>(
        &self,
        sink: &K,
        distinct: &mut DistinctUntilChanged<Query>,
        in_flight: &mut FuturesUnordered<BoxFuture<'static, SearchOutcome>>,
        event: &InputEvent,
    ) {
        let query = Query::from(event);
        if !distinct.accept(&query) {
            trace!(query = %query, "Unchanged query skipped");
            return;
        }

        match Branch::of(query) {
            Branch::Empty => {
                self.reporter.query_reset();
                sink.publish(UiState::Empty);
            }
            Branch::NonEmpty(query) => {
                self.reporter.query_emitted(&query);
                sink.publish(UiState::Loading);
                in_flight.push(self.search(query));
            }
        }
    }

    fn search(&self, query: Query) -> BoxFuture<'static, SearchOutcome> {
        let config = self.config.clone();
        let api_service = self.api_service.clone();

        async move {
            let ctx = CoreContext {
                config: &config,
                api_service: api_service.as_ref(),
            };
            let result = SearchUsers.run(&ctx, &query).await;
            (query, result)
        }
        .boxed()
    }

    fn complete<K: UiStateSink>(
        &self,
        sink: &K,
        query: &Query,
        result: Result<Vec<SearchResult>>,
    ) {
        if let Err(e) = &result {
            self.reporter.request_failed(query, e);
        }

        sink.publish(SearchUsers::resolve_state(result));
    }
}
