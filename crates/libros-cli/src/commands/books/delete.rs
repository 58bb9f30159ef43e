//! Delete command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use libros_core::DeleteForm;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Comma-separated ISBNs
    #[arg(long, default_value = "")]
    pub isbns: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let mut form = DeleteForm::new(args.isbns);
    let request = form.validate()?;

    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let outcome = ctx
        .client
        .catalog()
        .submit_delete(&mut form)
        .await
        .context("Failed to delete books")?;

    if !outcome.is_success() {
        bail!("{}", outcome);
    }
    output::success(&outcome.to_string());
    output::field("ISBNs", &request.isbns.len().to_string());
    Ok(())
}
