//! Config subcommand implementations.

mod reset;
mod set;
mod show;
mod test;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the connection settings and endpoints
    Show(show::ShowArgs),

    /// Change one or more connection settings
    Set(set::SetArgs),

    /// Go back to the default settings
    Reset(reset::ResetArgs),

    /// Probe the identity and catalog services
    Test(test::TestArgs),
}

pub async fn handle(cmd: ConfigCommand) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show(args) => show::run(args).await,
        ConfigSubcommand::Set(args) => set::run(args).await,
        ConfigSubcommand::Reset(args) => reset::run(args).await,
        ConfigSubcommand::Test(args) => test::run(args).await,
    }
}
