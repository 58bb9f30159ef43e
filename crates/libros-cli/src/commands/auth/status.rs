//! Status command: run startup and report the result.

use anyhow::Result;
use clap::Args;

use libros_http::Startup;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub async fn run(_args: StatusArgs) -> Result<()> {
    let ctx = CliContext::load().await?;

    match ctx.client.start().await {
        Startup::LoginRequired { notice } => {
            if let Some(notice) = notice {
                output::notice(notice);
            }
            output::field("Session", "not logged in");
            output::field("Next", "libros auth login --email <EMAIL> --password <PASSWORD>");
        }
        Startup::Ready { options } => {
            output::success("Session restored");
            output::field("Authors", &options.authors.len().to_string());
            output::field("Formats", &options.formats.len().to_string());
        }
        Startup::Degraded { error } => {
            output::success("Session restored");
            output::notice(&format!("Catalog unavailable: {}", error));
        }
    }

    output::field("Catalog", ctx.config.root_url()?.as_str());
    Ok(())
}
