//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name for the new account
    #[arg(long)]
    pub username: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let ctx = CliContext::load().await?;

    let message = ctx
        .client
        .identity()
        .register(&args.username, &args.email, &args.password)
        .await
        .context("Failed to register")?;

    output::success(&message);
    output::field("Email", &args.email);
    Ok(())
}
