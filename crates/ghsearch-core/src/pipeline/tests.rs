use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    StreamExt,
};
use ghsearch_config::Config;
use ghsearch_ghapi_interface::{types::GhSearchUser, ApiError, ApiService, MockApiService};
use ghsearch_models::{InputEvent, SearchResult, UiState};
use pretty_assertions::assert_eq;
use tokio::time::{sleep, Instant};

use super::*;

const DEBOUNCE: Duration = Duration::from_millis(300);

fn user(id: u64, login: &str) -> GhSearchUser {
    GhSearchUser {
        id,
        login: login.into(),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{id}?v=4"),
    }
}

fn result(id: u64, login: &str) -> SearchResult {
    SearchResult {
        id,
        login: login.into(),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{id}?v=4"),
    }
}

fn test_config() -> Arc<Config> {
    let mut config = Config::from_env_no_version().unwrap();
    config.pipeline.debounce_ms = DEBOUNCE.as_millis() as u64;
    Arc::new(config)
}

struct PipelineTest {
    input: Option<UnboundedSender<InputEvent>>,
    states: UnboundedReceiver<UiState>,
    handle: PipelineHandle,
}

impl PipelineTest {
    fn start<A: ApiService + 'static>(api_service: A) -> Self {
        Self::start_with(QueryPipeline::new(test_config(), Arc::new(api_service)))
    }

    fn start_with(pipeline: QueryPipeline) -> Self {
        let (input, events) = mpsc::unbounded();
        let (sink, states) = mpsc::unbounded();
        let handle = pipeline.spawn(events, sink);

        Self {
            input: Some(input),
            states,
            handle,
        }
    }

    fn type_value(&self, value: &str) {
        self.input
            .as_ref()
            .expect("input still open")
            .unbounded_send(InputEvent::new(value))
            .unwrap();
    }

    async fn next_state(&mut self) -> Option<UiState> {
        self.states.next().await
    }

    async fn next_states(&mut self, count: usize) -> Vec<UiState> {
        let mut states = Vec::with_capacity(count);
        for _ in 0..count {
            states.push(self.next_state().await.expect("pipeline stopped early"));
        }
        states
    }

    /// Close the input, wait for completion and return what was left.
    async fn finish(mut self) -> Vec<UiState> {
        self.input.take();
        self.handle.join().await;
        self.states.collect().await
    }
}

/// API answering each query after its own delay.
struct DelayedApiService {
    answers: HashMap<String, (Duration, Vec<GhSearchUser>)>,
}

#[async_trait]
impl ApiService for DelayedApiService {
    async fn users_search(&self, query: &str) -> ghsearch_ghapi_interface::Result<Vec<GhSearchUser>> {
        let (delay, users) = self
            .answers
            .get(query)
            .cloned()
            .ok_or_else(|| ApiError::request_failure(format!("unexpected query {query}")))?;
        sleep(delay).await;
        Ok(users)
    }
}

#[tokio::test(start_paused = true)]
async fn search_one_user() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "octocat")
        .return_once(|_| Ok(vec![user(583231, "octocat")]));

    let mut test = PipelineTest::start(api_service);
    test.type_value("octocat");

    assert_eq!(
        test.next_states(2).await,
        vec![
            UiState::Loading,
            UiState::Results(vec![result(583231, "octocat")])
        ]
    );
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn search_without_match() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "zzzzzznonexistentuser")
        .return_once(|_| Ok(vec![]));

    let mut test = PipelineTest::start(api_service);
    test.type_value("zzzzzznonexistentuser");

    assert_eq!(
        test.next_states(2).await,
        vec![UiState::Loading, UiState::Empty]
    );
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn only_last_value_of_burst_is_searched() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "octocat")
        .return_once(|_| Ok(vec![user(583231, "octocat")]));

    let mut test = PipelineTest::start(api_service);
    let start = Instant::now();
    for value in ["o", "oc", "octo", "octoca", "octocat"] {
        test.type_value(value);
        sleep(Duration::from_millis(100)).await;
    }

    assert_eq!(test.next_state().await, Some(UiState::Loading));
    // Last keystroke at 400ms, plus the quiet period
    assert!(start.elapsed() >= Duration::from_millis(400) + DEBOUNCE);
    assert_eq!(
        test.next_state().await,
        Some(UiState::Results(vec![result(583231, "octocat")]))
    );
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn identical_consecutive_queries_search_once() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "foo")
        .return_once(|_| Ok(vec![user(1, "foo")]));
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "bar")
        .return_once(|_| Ok(vec![user(2, "bar")]));

    let mut test = PipelineTest::start(api_service);
    test.type_value("foo");
    assert_eq!(
        test.next_states(2).await,
        vec![UiState::Loading, UiState::Results(vec![result(1, "foo")])]
    );

    // Same value, then same value once trimmed, then a burst settling on it
    test.type_value("foo");
    sleep(DEBOUNCE * 2).await;
    test.type_value(" foo ");
    sleep(DEBOUNCE * 2).await;
    test.type_value("foob");
    test.type_value("foo");
    sleep(DEBOUNCE * 2).await;

    test.type_value("bar");
    assert_eq!(
        test.next_states(2).await,
        vec![UiState::Loading, UiState::Results(vec![result(2, "bar")])]
    );
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn blank_query_resets_without_request() {
    // Any call on the mock would panic the pipeline
    let mut test = PipelineTest::start(MockApiService::new());

    test.type_value("   ");
    assert_eq!(test.next_state().await, Some(UiState::Empty));

    // Still the same (trimmed) value
    test.type_value("");
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn clearing_the_field_replaces_results() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .return_once(|_| Ok(vec![user(583231, "octocat")]));

    let mut test = PipelineTest::start(api_service);
    test.type_value("octocat");
    assert_eq!(
        test.next_states(2).await,
        vec![
            UiState::Loading,
            UiState::Results(vec![result(583231, "octocat")])
        ]
    );

    test.type_value("");
    assert_eq!(test.next_state().await, Some(UiState::Empty));
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn pipeline_survives_failures() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "foo")
        .return_once(|_| Err(ApiError::request_failure("connection reset")));
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "octocat")
        .return_once(|_| Ok(vec![user(583231, "octocat")]));

    let mut reporter = MockPipelineReporter::new();
    reporter.expect_query_emitted().times(2).return_const(());
    reporter.expect_query_reset().never();
    reporter
        .expect_request_failed()
        .once()
        .withf(|query, _| query.as_str() == "foo")
        .return_const(());

    let mut test = PipelineTest::start_with(
        QueryPipeline::new(test_config(), Arc::new(api_service)).with_reporter(Arc::new(reporter)),
    );

    test.type_value("foo");
    assert_eq!(
        test.next_states(2).await,
        vec![
            UiState::Loading,
            UiState::Error("Search failed: connection reset".into())
        ]
    );

    test.type_value("octocat");
    assert_eq!(
        test.next_states(2).await,
        vec![
            UiState::Loading,
            UiState::Results(vec![result(583231, "octocat")])
        ]
    );
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn late_response_overwrites_newer_one() {
    let api_service = DelayedApiService {
        answers: HashMap::from([
            (
                "slow".to_string(),
                (Duration::from_secs(2), vec![user(1, "slowpoke")]),
            ),
            (
                "fast".to_string(),
                (Duration::from_millis(10), vec![user(2, "speedy")]),
            ),
        ]),
    };

    let mut test = PipelineTest::start(api_service);
    test.type_value("slow");
    assert_eq!(test.next_state().await, Some(UiState::Loading));
    test.type_value("fast");

    assert_eq!(
        test.next_states(3).await,
        vec![
            UiState::Loading,
            UiState::Results(vec![result(2, "speedy")]),
            UiState::Results(vec![result(1, "slowpoke")]),
        ]
    );
    assert_eq!(test.finish().await, vec![]);
}

#[tokio::test(start_paused = true)]
async fn no_state_after_unsubscribe() {
    let api_service = DelayedApiService {
        answers: HashMap::from([(
            "octocat".to_string(),
            (Duration::from_secs(1), vec![user(583231, "octocat")]),
        )]),
    };

    let PipelineTest {
        input,
        mut states,
        handle,
    } = PipelineTest::start(api_service);
    let input = input.unwrap();
    input.unbounded_send(InputEvent::new("octocat")).unwrap();
    assert_eq!(states.next().await, Some(UiState::Loading));

    handle.unsubscribe().await;
    sleep(Duration::from_secs(5)).await;

    // The request would have resolved by now; the sink is gone instead
    assert_eq!(states.next().await, None);
    assert!(input.unbounded_send(InputEvent::new("more")).is_err());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_tears_down() {
    let PipelineTest {
        input,
        mut states,
        handle,
    } = PipelineTest::start(MockApiService::new());

    assert!(!handle.is_finished());
    drop(handle);

    assert_eq!(states.next().await, None);
    drop(input);
}

#[tokio::test(start_paused = true)]
async fn end_of_input_flushes_pending_value() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .withf(|query| query == "octocat")
        .return_once(|_| Ok(vec![user(583231, "octocat")]));

    let test = PipelineTest::start(api_service);
    let start = Instant::now();
    test.type_value("octo");
    test.type_value("octocat");

    assert_eq!(
        test.finish().await,
        vec![
            UiState::Loading,
            UiState::Results(vec![result(583231, "octocat")])
        ]
    );
    assert!(start.elapsed() < DEBOUNCE);
}

#[tokio::test(start_paused = true)]
async fn end_of_input_waits_for_in_flight_requests() {
    let api_service = DelayedApiService {
        answers: HashMap::from([(
            "octocat".to_string(),
            (Duration::from_secs(1), vec![user(583231, "octocat")]),
        )]),
    };

    let mut test = PipelineTest::start(api_service);
    test.type_value("octocat");
    assert_eq!(test.next_state().await, Some(UiState::Loading));

    assert_eq!(
        test.finish().await,
        vec![UiState::Results(vec![result(583231, "octocat")])]
    );
}

#[tokio::test(start_paused = true)]
async fn publishes_into_ui_state_cell() {
    let mut api_service = MockApiService::new();
    api_service
        .expect_users_search()
        .once()
        .return_once(|_| Ok(vec![user(583231, "octocat")]));

    let cell = UiStateCell::new();
    let mut receiver = cell.subscribe();
    let (input, events) = mpsc::unbounded();
    let handle = QueryPipeline::new(test_config(), Arc::new(api_service)).spawn(events, cell.clone());
    assert_eq!(cell.current(), UiState::Idle);

    input.unbounded_send(InputEvent::new("octocat")).unwrap();
    drop(input);
    handle.join().await;

    assert!(receiver.has_changed().unwrap());
    assert_eq!(
        *receiver.borrow_and_update(),
        UiState::Results(vec![result(583231, "octocat")])
    );
}
