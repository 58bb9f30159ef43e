//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use libros_core::UpdateForm;

use crate::output;
use crate::session::CliContext;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// ISBN of the book to change
    #[arg(long, default_value = "")]
    pub isbn: String,

    /// New title
    #[arg(long, default_value = "")]
    pub title: String,

    /// New price
    #[arg(long, default_value = "")]
    pub price: String,

    /// New stock
    #[arg(long, default_value = "")]
    pub stock: String,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let form = UpdateForm {
        isbn: args.isbn,
        title: args.title,
        price: args.price,
        stock: args.stock,
    };
    form.validate()?;

    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let outcome = ctx
        .client
        .catalog()
        .submit_update(&form)
        .await
        .context("Failed to update book")?;

    if !outcome.is_success() {
        bail!("{}", outcome);
    }
    output::success(&outcome.to_string());
    Ok(())
}
