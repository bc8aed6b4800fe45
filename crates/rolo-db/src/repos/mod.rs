//! Repository modules for Rolodex entities.
//!
//! Each module exposes free async functions that take the caller's
//! [`Session`](crate::Session) explicitly.

pub mod contact;
pub mod user;
