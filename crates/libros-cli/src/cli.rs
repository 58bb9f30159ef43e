//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::books::BooksCommand;
use crate::commands::config::ConfigCommand;

/// Client for the libros books catalog.
#[derive(Parser, Debug)]
#[command(name = "libros")]
#[command(author, version = env!("LIBROS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Login, logout and session status
    Auth(AuthCommand),

    /// Catalog connection settings
    Config(ConfigCommand),

    /// Query and change the catalog
    Books(BooksCommand),
}
