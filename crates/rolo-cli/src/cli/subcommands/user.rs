use clap::Subcommand;

/// User account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Register a user.
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// admin, moderator or user (default: user)
        #[arg(long)]
        role: Option<String>,
    },
    /// Show a user by email (defaults to the acting user).
    Get { email: Option<String> },
    /// Change a user's role. Admin only.
    #[command(name = "set-role")]
    SetRole { email: String, role: String },
}
