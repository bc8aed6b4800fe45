//! Entity structs for all Rolodex domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema export.

mod contact;
mod user;

pub use contact::{Contact, ContactInput};
pub use user::{NewUser, User};
