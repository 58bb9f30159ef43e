//! Set command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use libros_core::traits::ConfigStore;
use libros_core::{Protocol, ServiceUrl};

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// http or https
    #[arg(long)]
    pub protocol: Option<Protocol>,

    /// Catalog host name
    #[arg(long)]
    pub host: Option<String>,

    /// Catalog port
    #[arg(long)]
    pub port: Option<u16>,

    /// Path prefix of the catalog API, e.g. /api
    #[arg(long)]
    pub base_path: Option<String>,

    /// Identity service URL
    #[arg(long)]
    pub auth_url: Option<String>,
}

pub async fn run(args: SetArgs) -> Result<()> {
    if args.protocol.is_none()
        && args.host.is_none()
        && args.port.is_none()
        && args.base_path.is_none()
        && args.auth_url.is_none()
    {
        bail!("Nothing to change. Pass at least one of --protocol, --host, --port, --base-path, --auth-url.");
    }

    let ctx = CliContext::load().await?;
    let mut config = ctx.config.clone();

    if let Some(protocol) = args.protocol {
        config = config.with_protocol(protocol);
    }
    if let Some(host) = &args.host {
        config = config.with_host(host).context("Invalid host")?;
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(base_path) = &args.base_path {
        config = config.with_base_path(base_path).context("Invalid base path")?;
    }
    if let Some(auth_url) = &args.auth_url {
        let identity = ServiceUrl::new(auth_url).context("Invalid identity URL")?;
        config = config.with_identity_url(identity);
    }

    ctx.store
        .save_config(&config)
        .await
        .context("Failed to save configuration")?;

    output::success("Configuration saved");
    output::field("Catalog", config.root_url()?.as_str());
    output::field("Identity", config.identity_url().as_str());
    Ok(())
}
