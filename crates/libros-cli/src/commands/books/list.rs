//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;

use super::view::{self, ViewArgs};
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let result = ctx
        .client
        .catalog()
        .list_all()
        .await
        .context("Failed to list books")?;

    view::print(&result, args.view.view)
}
