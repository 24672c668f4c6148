use clap::{Args, Subcommand};
use roll_core::enums::Role;

/// User administration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List,
    /// Create a user.
    Create(UserCreateArgs),
    /// Act as another user; the issued token replaces the stored one.
    Impersonate {
        /// User ID.
        id: i64,
    },
}

#[derive(Clone, Debug, Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
    /// teacher or student
    #[arg(long, default_value = "student")]
    pub role: Role,
}
