//! Query by ISBN.

use anyhow::{Context, Result};
use clap::Args;

use libros_core::forms::{self, QUERY_ISBN_REQUIRED};

use super::view::{self, ViewArgs};
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct IsbnArgs {
    /// ISBN to look for
    #[arg(default_value = "")]
    pub isbn: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub async fn run(args: IsbnArgs) -> Result<()> {
    forms::require(&args.isbn, QUERY_ISBN_REQUIRED)?;

    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let result = ctx
        .client
        .catalog()
        .by_isbn(&args.isbn)
        .await
        .context("Failed to query by ISBN")?;

    view::print(&result, args.view.view)
}
