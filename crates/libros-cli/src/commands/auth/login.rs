//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use libros_core::Credentials;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Account password
    #[arg(long, default_value = "")]
    pub password: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);
    credentials.validate()?;

    let ctx = CliContext::load().await?;

    eprintln!("{}", "Logging in...".dimmed());
    ctx.client
        .session()
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    output::field("Email", credentials.email());
    output::field("Identity", ctx.config.identity_url().as_str());

    Ok(())
}
