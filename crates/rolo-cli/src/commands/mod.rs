pub mod contact;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod user;
