use std::{
    io::{Cursor, Write},
    sync::Arc,
};

use clap::Parser;
use ghsearch_config::Config;
use ghsearch_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub api_service: MockApiService,
    pub input: String,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version().unwrap(),
            api_service: MockApiService::new(),
            input: String::new(),
        }
    }

    pub fn with_input<T: Into<String>>(mut self, input: T) -> Self {
        self.input = input.into();
        self
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: Arc::new(self.config),
            api_service: Arc::new(self.api_service),
            reader: Box::new(Cursor::new(self.input.into_bytes())),
            writer,
        }
    }
}

pub(crate) async fn test_command_result(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["ghsearch"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = match Args::try_parse_from(command_args) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        };

        CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?;
    }

    let vec = buf.read().await.to_vec();
    Ok(String::from_utf8(vec)?)
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    test_command_result(ctx, command_args).await.unwrap()
}
