//! Books subcommand implementations.

mod author;
mod delete;
mod format;
mod insert;
mod isbn;
mod list;
mod options;
mod update;
mod view;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct BooksCommand {
    #[command(subcommand)]
    pub command: BooksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BooksSubcommand {
    /// List every book
    List(list::ListArgs),

    /// Find books by ISBN
    Isbn(isbn::IsbnArgs),

    /// Find books by author
    Author(author::AuthorArgs),

    /// Find books by format
    Format(format::FormatArgs),

    /// Show the authors and formats to choose from
    Options(options::OptionsArgs),

    /// Add a book
    Insert(insert::InsertArgs),

    /// Change the title, price or stock of a book
    Update(update::UpdateArgs),

    /// Remove books by ISBN
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: BooksCommand) -> Result<()> {
    match cmd.command {
        BooksSubcommand::List(args) => list::run(args).await,
        BooksSubcommand::Isbn(args) => isbn::run(args).await,
        BooksSubcommand::Author(args) => author::run(args).await,
        BooksSubcommand::Format(args) => format::run(args).await,
        BooksSubcommand::Options(args) => options::run(args).await,
        BooksSubcommand::Insert(args) => insert::run(args).await,
        BooksSubcommand::Update(args) => update::run(args).await,
        BooksSubcommand::Delete(args) => delete::run(args).await,
    }
}
