use std::time::Duration;

use tokio::time::Instant;

/// Debounce bookkeeping: keeps the latest value of a burst until the
/// quiet period has elapsed since the last push.
#[derive(Debug)]
pub struct Debouncer<T> {
    period: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.period));
    }

    /// When the pending value becomes ready, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its quiet period is over.
    pub fn take_ready(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= now => self.flush(),
            _ => None,
        }
    }

    /// Take the pending value right away.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}
