use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with username and password.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status and resolved role.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account username.
    #[arg(long, short = 'u')]
    pub username: String,
    /// Password (prompted for when omitted).
    #[arg(long)]
    pub password: Option<String>,
}
