//! Insert command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use libros_core::InsertForm;

use crate::output;
use crate::session::CliContext;

/// Every field is required; blanks are reported together before any request.
#[derive(Args, Debug)]
pub struct InsertArgs {
    #[arg(long, default_value = "")]
    pub isbn: String,

    #[arg(long, default_value = "")]
    pub title: String,

    /// Publication year
    #[arg(long, default_value = "")]
    pub year: String,

    #[arg(long, default_value = "")]
    pub price: String,

    /// Units in stock
    #[arg(long, default_value = "")]
    pub stock: String,

    #[arg(long, default_value = "")]
    pub genre: String,

    #[arg(long, default_value = "")]
    pub format: String,

    /// Comma-separated author names
    #[arg(long, default_value = "")]
    pub authors: String,
}

impl From<InsertArgs> for InsertForm {
    fn from(args: InsertArgs) -> Self {
        InsertForm {
            isbn: args.isbn,
            title: args.title,
            year: args.year,
            price: args.price,
            stock: args.stock,
            genre: args.genre,
            format: args.format,
            authors: args.authors,
        }
    }
}

pub async fn run(args: InsertArgs) -> Result<()> {
    let mut form = InsertForm::from(args);
    form.validate()?;

    let ctx = CliContext::load().await?;
    ctx.require_session().await?;

    let inserted = ctx
        .client
        .catalog()
        .submit_insert(&mut form)
        .await
        .context("Failed to insert book")?;

    if !inserted.outcome.is_success() {
        bail!("{}", inserted.outcome);
    }

    output::success(&inserted.outcome.to_string());
    if let Some(options) = inserted.options {
        output::field("Autores", &options.authors.len().to_string());
        output::field("Formatos", &options.formats.len().to_string());
    }
    Ok(())
}
