//! Test command: probe both services with the current settings.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use libros_http::CatalogResult;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct TestArgs {}

pub async fn run(_args: TestArgs) -> Result<()> {
    let ctx = CliContext::load().await?;
    let mut failures = 0;

    eprintln!("{}", "Probing identity service...".dimmed());
    match ctx.client.identity().health().await {
        Ok(health) => output::success(&format!(
            "Identity {}: {} ({})",
            ctx.config.identity_url(),
            health.status,
            health.message
        )),
        Err(e) => {
            failures += 1;
            output::error(&format!("Identity {}: {}", ctx.config.identity_url(), e));
        }
    }

    // Attach the stored session, if any.
    ctx.client.session().bootstrap().await;

    eprintln!("{}", "Probing catalog service...".dimmed());
    let catalog = ctx.config.root_url()?;
    match ctx.client.catalog().list_all().await {
        Ok(result @ (CatalogResult::Loaded { .. } | CatalogResult::Empty)) => {
            output::success(&format!("Catalog {}: {}", catalog, result.status_line()));
        }
        Ok(CatalogResult::Failed { status, message }) => {
            failures += 1;
            output::error(&format!("Catalog {}: {} (HTTP {})", catalog, message, status));
        }
        Err(e) => {
            failures += 1;
            output::error(&format!("Catalog {}: {}", catalog, e));
        }
    }

    if failures > 0 {
        bail!("{} of 2 services unreachable", failures);
    }
    Ok(())
}
