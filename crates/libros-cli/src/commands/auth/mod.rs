//! Auth subcommand implementations.

mod login;
mod logout;
mod refresh;
mod register;
mod status;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in with email and password
    Login(login::LoginArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Recover the stored session and show where it stands
    Status(status::StatusArgs),

    /// Exchange the stored refresh token for a new access token
    Refresh(refresh::RefreshArgs),

    /// Create an account on the identity service
    Register(register::RegisterArgs),
}

pub async fn handle(cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args).await,
        AuthSubcommand::Logout(args) => logout::run(args).await,
        AuthSubcommand::Status(args) => status::run(args).await,
        AuthSubcommand::Refresh(args) => refresh::run(args).await,
        AuthSubcommand::Register(args) => register::run(args).await,
    }
}
