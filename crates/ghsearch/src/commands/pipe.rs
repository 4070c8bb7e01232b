use async_trait::async_trait;
use clap::Parser;
use futures::{channel::mpsc, stream, StreamExt};
use ghsearch_core::pipeline::QueryPipeline;
use ghsearch_models::InputEvent;
use tokio::io::AsyncBufReadExt;
use tracing::warn;

use super::{Command, CommandContext};
use crate::Result;

/// Feed stdin lines to the query pipeline and print each UI state as JSON
///
/// Every line is one value of the search field. Stops once stdin is closed
/// and pending searches are done.
#[derive(Parser)]
pub(crate) struct PipeCommand;

#[async_trait]
impl Command for PipeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let lines = ctx.reader.lines();
        let events = stream::unfold(lines, |mut lines| async move {
            match lines.next_line().await {
                Ok(Some(line)) => Some((InputEvent::new(line), lines)),
                Ok(None) => None,
                Err(e) => {
                    warn!(error = %e, "Could not read input, closing");
                    None
                }
            }
        });

        let (sink, mut states) = mpsc::unbounded();
        let handle = QueryPipeline::new(ctx.config.clone(), ctx.api_service.clone()).spawn(events, sink);

        while let Some(state) = states.next().await {
            let line = serde_json::to_string(&state)?;
            writeln!(ctx.writer.write().await, "{line}")?;
        }

        handle.join().await;

        Ok(())
    }
}
