//! Shared test utilities for rolo-db unit tests.

pub(crate) mod helpers {
    use chrono::NaiveDate;
    use rolo_core::entities::{ContactInput, NewUser, User};
    use rolo_core::enums::Role;

    use crate::RoloDb;
    use crate::repos::user::create_user;
    use crate::session::Session;

    /// Create an in-memory database with migrations applied.
    pub async fn test_db() -> RoloDb {
        RoloDb::open_local(":memory:").await.unwrap()
    }

    /// Register a plain user named `name` with email `name@example.com`.
    pub async fn seed_user(session: &Session, name: &str) -> User {
        let body = NewUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            role: Role::User,
        };
        create_user(&body, session).await.unwrap()
    }

    /// A valid contact payload; email is derived from the names.
    pub fn sample_input(first: &str, last: &str) -> ContactInput {
        ContactInput {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: "1234567890".to_string(),
            birthday: ymd(1990, 4, 12),
            additional_data: Some("test additional data".to_string()),
        }
    }

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Total rows in `contacts`, across every owner.
    pub async fn count_contacts(session: &Session) -> i64 {
        let mut rows = session
            .conn()
            .query("SELECT count(*) FROM contacts", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        row.get::<i64>(0).unwrap()
    }
}
