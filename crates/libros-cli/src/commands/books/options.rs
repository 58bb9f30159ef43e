//! Options command: the author and format choices.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Print the options as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: OptionsArgs) -> Result<()> {
    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let options = ctx
        .client
        .catalog()
        .load_options()
        .await
        .context("Error al cargar datos")?;

    if args.json {
        return output::json_pretty(&options);
    }

    output::list("Autores", &options.authors);
    output::list("Formatos", &options.formats);
    Ok(())
}
