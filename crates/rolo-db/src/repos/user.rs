//! User repository: registration and lookup of contact owners.

use rolo_core::entities::{NewUser, User};
use rolo_core::enums::Role;

use crate::error::DatabaseError;
use crate::helpers::{first_row, parse_datetime, parse_enum};
use crate::session::Session;

const COLUMNS: &str = "id, username, email, role, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        username: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// Register a user. Duplicate emails fail with the store's unique-constraint error.
pub async fn create_user(body: &NewUser, db: &Session) -> Result<User, DatabaseError> {
    let sql = format!(
        "INSERT INTO users (username, email, role) VALUES (?1, ?2, ?3) RETURNING {COLUMNS}"
    );
    let rows = db
        .conn()
        .query(
            &sql,
            libsql::params![body.username.as_str(), body.email.as_str(), body.role.as_str()],
        )
        .await?;
    let user = first_row(rows, row_to_user)
        .await?
        .ok_or(DatabaseError::NoResult)?;
    tracing::debug!(id = user.id, role = %user.role, "created user");
    Ok(user)
}

pub async fn get_user(user_id: i64, db: &Session) -> Result<Option<User>, DatabaseError> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE id = ?1");
    let rows = db.conn().query(&sql, [user_id]).await?;
    first_row(rows, row_to_user).await
}

pub async fn get_user_by_email(email: &str, db: &Session) -> Result<Option<User>, DatabaseError> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE email = ?1");
    let rows = db.conn().query(&sql, [email]).await?;
    first_row(rows, row_to_user).await
}

/// Change a user's role, returning the updated user or `None` if absent.
pub async fn set_role(
    user_id: i64,
    role: Role,
    db: &Session,
) -> Result<Option<User>, DatabaseError> {
    let sql = format!("UPDATE users SET role = ?1 WHERE id = ?2 RETURNING {COLUMNS}");
    let rows = db
        .conn()
        .query(&sql, libsql::params![role.as_str(), user_id])
        .await?;
    first_row(rows, row_to_user).await
}
