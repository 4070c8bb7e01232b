use async_trait::async_trait;
use clap::Parser;
use ghsearch_core::use_cases::search::{SearchUsers, SearchUsersInterface};
use ghsearch_models::Query;

use super::{Command, CommandContext};
use crate::Result;

/// Search GitHub users once, without the query pipeline
#[derive(Parser)]
pub(crate) struct SearchCommand {
    /// Username to search
    query: String,
}

#[async_trait]
impl Command for SearchCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let query = Query::new(self.query);
        let users = if query.is_empty() {
            vec![]
        } else {
            SearchUsers.run(&ctx.as_core_context(), &query).await?
        };

        if users.is_empty() {
            writeln!(ctx.writer.write().await, "No User")?;
        } else {
            for user in users {
                writeln!(
                    ctx.writer.write().await,
                    "- {} ({}) {}",
                    user.login,
                    user.id,
                    user.avatar_url
                )?;
            }
        }

        Ok(())
    }
}
