use std::sync::Arc;

use clap::Parser;
use ghsearch_config::{ApiDriver, Config};
use ghsearch_ghapi_github::GithubApiService;
use ghsearch_ghapi_interface::ApiService;
use ghsearch_ghapi_null::NullApiService;
use tokio::{io::BufReader, sync::RwLock};
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let api_service: Arc<dyn ApiService> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using GithubApiService API driver");
                    Arc::new(GithubApiService::new(config.clone())?)
                } else {
                    info!("Using NullApiService API driver");
                    Arc::new(NullApiService::new())
                }
            };

            let ctx = CommandContext {
                config: Arc::new(config),
                api_service,
                reader: Box::new(BufReader::new(tokio::io::stdin())),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
