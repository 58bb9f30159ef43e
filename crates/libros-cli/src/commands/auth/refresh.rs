//! Refresh command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use libros_core::SESSION_EXPIRED_NOTICE;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(_args: RefreshArgs) -> Result<()> {
    let ctx = CliContext::load().await?;

    eprintln!("{}", "Refreshing session...".dimmed());
    if !ctx.client.session().refresh_access_token().await {
        bail!(SESSION_EXPIRED_NOTICE);
    }

    output::success("Session refreshed successfully");
    Ok(())
}
