use async_trait::async_trait;
use clap::Parser;
use ghsearch_logging::temporarily_disable_logging;
use ghsearch_tui::run_tui;

use super::{Command, CommandContext};
use crate::Result;

/// Start the interactive search UI
#[derive(Parser)]
pub(crate) struct UiCommand;

#[async_trait]
impl Command for UiCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let _guard = temporarily_disable_logging();
        run_tui(ctx.config, ctx.api_service)
            .await
            .map_err(Into::into)
    }
}
