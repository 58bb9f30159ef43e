//! Query by format.

use anyhow::{Context, Result};
use clap::Args;

use libros_core::forms::{self, QUERY_FORMAT_REQUIRED};

use super::view::{self, ViewArgs};
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Format name, as listed by `libros books options`
    #[arg(default_value = "")]
    pub format: String,

    #[command(flatten)]
    pub view: ViewArgs,
}

pub async fn run(args: FormatArgs) -> Result<()> {
    forms::require(&args.format, QUERY_FORMAT_REQUIRED)?;

    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let result = ctx
        .client
        .catalog()
        .by_format(&args.format)
        .await
        .context("Failed to query by format")?;

    view::print(&result, args.view.view)
}
