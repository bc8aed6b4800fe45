use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rolo_core::entities::ContactInput;

/// Contact commands. Everything except `all` is scoped to the acting user.
///
/// Page size comes from the global `--limit` flag.
#[derive(Clone, Debug, Subcommand)]
pub enum ContactCommands {
    /// List your contacts.
    List {
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// List contacts of every user. Admin and moderator only.
    All {
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Get a contact by ID.
    Get { id: i64 },
    /// Create a contact.
    Create {
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Replace every field of a contact.
    Update {
        id: i64,
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a contact.
    Delete { id: i64 },
    /// Find contacts whose first name, last name or email contains a query.
    Search {
        #[arg(default_value = "")]
        query: String,
    },
    /// Contacts with a birthday in the next few days.
    Birthdays {
        #[arg(long)]
        days: Option<u32>,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

/// Every writable contact field, shared by `create` and `update`.
#[derive(Clone, Debug, Args)]
pub struct ContactFields {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    /// Date of birth, YYYY-MM-DD.
    #[arg(long)]
    pub birthday: NaiveDate,
    /// Free-form notes.
    #[arg(long)]
    pub notes: Option<String>,
}

impl ContactFields {
    #[must_use]
    pub fn into_input(self) -> ContactInput {
        ContactInput {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            birthday: self.birthday,
            additional_data: self.notes,
        }
    }
}
