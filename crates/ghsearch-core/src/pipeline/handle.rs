use tokio::{sync::oneshot, task::JoinHandle};
use tracing::debug;

/// Subscription to a running pipeline.
///
/// Dropping the handle tears the pipeline down.
#[derive(Debug)]
pub struct PipelineHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl PipelineHandle {
    pub(crate) fn new(shutdown: oneshot::Sender<()>, task: JoinHandle<()>) -> Self {
        Self {
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    /// Tear the pipeline down and wait for it to stop.
    ///
    /// Once this returns, no more UI state is published, even for requests
    /// still in flight.
    pub async fn unsubscribe(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            // The pipeline may already have stopped by itself.
            let _ = shutdown.send(());
        }

        if let Some(task) = self.task.take() {
            Self::wait(task).await;
        }

        debug!("Pipeline unsubscribed");
    }

    /// Wait for the pipeline to stop by itself, once its input ended and
    /// in-flight requests resolved.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            Self::wait(task).await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    async fn wait(task: JoinHandle<()>) {
        if let Err(e) = task.await {
            if e.is_panic() {
                std::panic::resume_unwind(e.into_panic());
            }
        }
    }
}

impl Drop for PipelineHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
