//! Query by author.

use anyhow::{Context, Result};
use clap::Args;

use libros_core::forms::{self, QUERY_AUTHOR_REQUIRED};

use super::view::{self, ViewArgs};
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct AuthorArgs {
    /// Author name, as listed by `libros books options`
    #[arg(default_value = "")]
    pub author: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub async fn run(args: AuthorArgs) -> Result<()> {
    forms::require(&args.author, QUERY_AUTHOR_REQUIRED)?;

    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let result = ctx
        .client
        .catalog()
        .by_author(&args.author)
        .await
        .context("Failed to query by author")?;

    view::print(&result, args.view.view)
}
