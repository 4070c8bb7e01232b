//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use ghsearch_config::Config;
use ghsearch_core::CoreContext;
use ghsearch_ghapi_interface::ApiService;
use tokio::{io::AsyncBufRead, sync::RwLock};

use self::{pipe::PipeCommand, search::SearchCommand, ui::UiCommand};
use crate::Result;

mod pipe;
mod search;
mod ui;

pub(crate) struct CommandContext {
    pub config: Arc<Config>,
    pub api_service: Arc<dyn ApiService>,
    pub reader: Box<dyn AsyncBufRead + Send + Unpin>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext<'_> {
        CoreContext {
            config: &self.config,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Ui(UiCommand),
    Search(SearchCommand),
    Pipe(PipeCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Ui(sub) => sub.execute(ctx).await,
            Self::Search(sub) => sub.execute(ctx).await,
            Self::Pipe(sub) => sub.execute(ctx).await,
        }
    }
}
