use clap::{Args, Subcommand};

use crate::cli::subcommands::{ContactCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// User accounts.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Contacts owned by the acting user.
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `rolo schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: contact, contact-input, user, new-user.
    pub type_name: String,
}
