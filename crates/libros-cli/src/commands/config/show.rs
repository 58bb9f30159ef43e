//! Show command implementation.

use anyhow::Result;
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print the settings as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let ctx = CliContext::load().await?;
    let config = &ctx.config;

    if args.json {
        return output::json_pretty(config);
    }

    output::field("Protocol", config.protocol().as_str());
    output::field("Host", config.host());
    output::field("Port", &config.port().to_string());
    output::field("Base path", config.base_path());
    output::field("Identity", config.identity_url().as_str());
    output::field("Catalog", config.root_url()?.as_str());
    println!();

    for (name, path) in config.endpoint_templates() {
        output::field(name, &path);
    }

    Ok(())
}
