//! # rolo-core
//!
//! Core types and error types for Rolodex.
//!
//! This crate provides the foundational types shared across all Rolodex crates:
//! - Entity structs for contacts and their owning users
//! - Input shapes consumed by the repositories (`ContactInput`, `NewUser`)
//! - The `Role` enum used to gate administrative listings
//! - Input validation mirroring the public request schema
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;
