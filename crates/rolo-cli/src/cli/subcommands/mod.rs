mod contact;
mod user;

pub use contact::{ContactCommands, ContactFields};
pub use user::UserCommands;
