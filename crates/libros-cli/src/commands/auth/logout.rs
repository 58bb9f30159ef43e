//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let ctx = CliContext::load().await?;

    ctx.client
        .session()
        .logout()
        .await
        .context("Failed to remove stored session")?;

    output::success("Logged out");
    Ok(())
}
