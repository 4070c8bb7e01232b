use std::sync::Arc;

use futures::channel::mpsc::UnboundedSender;
use ghsearch_models::UiState;
use tokio::sync::watch;

/// Where the pipeline's terminal stage writes UI states.
pub trait UiStateSink: Send + Sync {
    fn publish(&self, state: UiState);
}

impl<T: UiStateSink + ?Sized> UiStateSink for Arc<T> {
    fn publish(&self, state: UiState) {
        (**self).publish(state)
    }
}

/// Keeps every transition, in order.
impl UiStateSink for UnboundedSender<UiState> {
    fn publish(&self, state: UiState) {
        if self.unbounded_send(state).is_err() {
            tracing::trace!("UI state receiver is gone");
        }
    }
}

/// The single UI-state cell read by a view. Starts as [`UiState::Idle`].
#[derive(Debug, Clone)]
pub struct UiStateCell {
    sender: Arc<watch::Sender<UiState>>,
}

impl UiStateCell {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(UiState::Idle);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Receiver notified on every write.
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> UiState {
        self.sender.borrow().clone()
    }
}

impl UiStateSink for UiStateCell {
    fn publish(&self, state: UiState) {
        tracing::trace!(state = state.to_str(), "UI state published");
        self.sender.send_replace(state);
    }
}
