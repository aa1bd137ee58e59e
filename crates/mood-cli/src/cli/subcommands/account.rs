use clap::{Args, Subcommand};

/// Account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AccountCommands {
    /// Register a new user.
    Signup(CredentialArgs),
    /// Check a username and password.
    Login(CredentialArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CredentialArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub password: String,
}
