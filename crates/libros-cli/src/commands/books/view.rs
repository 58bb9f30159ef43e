//! Printing catalog query results.

use anyhow::{Context, Result, bail};
use clap::Args;

use libros_http::{CatalogResult, ResultView};

use crate::output;

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// How to show the result: formatted or raw
    #[arg(long, default_value = "formatted")]
    pub view: ResultView,
}

/// Print the status line, the total and the document.
pub fn print(result: &CatalogResult, view: ResultView) -> Result<()> {
    match result {
        CatalogResult::Loaded { .. } => {
            output::success(result.status_line());
            if let Some(total) = result.total_line() {
                println!("{}", total);
            }
            if let Some(rendered) = result.render(view) {
                let document = rendered.context("Could not format the response")?;
                println!();
                println!("{}", document);
            }
            Ok(())
        }
        CatalogResult::Empty => {
            output::notice(result.status_line());
            Ok(())
        }
        CatalogResult::Failed { status, message } => {
            bail!("{}: {} (HTTP {})", result.status_line(), message, status)
        }
    }
}
