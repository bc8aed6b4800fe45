//! Contact repository: owner-scoped CRUD, search, and birthday lookups.
//!
//! Every function takes the caller's [`Session`] explicitly. All lookups
//! except [`list_all`] filter on both id and owner, so a contact is never
//! visible to or mutable by anyone but its owner. "Not found" comes back as
//! `Ok(None)`; storage failures propagate untouched.

use chrono::{Local, NaiveDate, Utc};

use rolo_core::entities::{Contact, ContactInput, User};

use crate::birthday::BirthdayWindow;
use crate::error::DatabaseError;
use crate::helpers::{
    collect_rows, contains_folded, first_row, format_date, get_opt_string, parse_date,
    parse_datetime,
};
use crate::session::Session;

const COLUMNS: &str = "id, first_name, last_name, email, phone, birthday, additional_data, \
                       created_at, updated_at, user_id";

fn row_to_contact(row: &libsql::Row) -> Result<Contact, DatabaseError> {
    Ok(Contact {
        id: row.get::<i64>(0)?,
        first_name: row.get::<String>(1)?,
        last_name: row.get::<String>(2)?,
        email: row.get::<String>(3)?,
        phone: row.get::<String>(4)?,
        birthday: parse_date(&row.get::<String>(5)?)?,
        additional_data: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
        user_id: row.get::<i64>(9)?,
    })
}

/// Contacts owned by `user`, in id order, skipping `offset` and returning at
/// most `limit`.
pub async fn list_for_user(
    limit: u32,
    offset: u32,
    db: &Session,
    user: &User,
) -> Result<Vec<Contact>, DatabaseError> {
    let sql = format!(
        "SELECT {COLUMNS} FROM contacts WHERE user_id = ?1 ORDER BY id LIMIT ?2 OFFSET ?3"
    );
    let rows = db
        .conn()
        .query(
            &sql,
            libsql::params![user.id, i64::from(limit), i64::from(offset)],
        )
        .await?;
    let contacts = collect_rows(rows, row_to_contact).await?;
    tracing::debug!(owner = user.id, limit, offset, rows = contacts.len(), "listed contacts");
    Ok(contacts)
}

/// Contacts across every owner, paginated like [`list_for_user`].
///
/// Performs no authorization; callers must restrict who can reach it.
pub async fn list_all(
    limit: u32,
    offset: u32,
    db: &Session,
) -> Result<Vec<Contact>, DatabaseError> {
    let sql = format!("SELECT {COLUMNS} FROM contacts ORDER BY id LIMIT ?1 OFFSET ?2");
    let rows = db
        .conn()
        .query(&sql, libsql::params![i64::from(limit), i64::from(offset)])
        .await?;
    let contacts = collect_rows(rows, row_to_contact).await?;
    tracing::debug!(limit, offset, rows = contacts.len(), "listed contacts of all owners");
    Ok(contacts)
}

pub async fn get(
    contact_id: i64,
    db: &Session,
    user: &User,
) -> Result<Option<Contact>, DatabaseError> {
    let sql = format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1 AND user_id = ?2");
    let rows = db
        .conn()
        .query(&sql, libsql::params![contact_id, user.id])
        .await?;
    first_row(rows, row_to_contact).await
}

/// Store a new contact owned by `user` and return it with its assigned id
/// and timestamps.
pub async fn create(
    body: &ContactInput,
    db: &Session,
    user: &User,
) -> Result<Contact, DatabaseError> {
    let sql = format!(
        "INSERT INTO contacts (first_name, last_name, email, phone, birthday, additional_data, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         RETURNING {COLUMNS}"
    );
    let rows = db
        .conn()
        .query(
            &sql,
            libsql::params![
                body.first_name.as_str(),
                body.last_name.as_str(),
                body.email.as_str(),
                body.phone.as_str(),
                format_date(body.birthday),
                body.additional_data.as_deref(),
                user.id
            ],
        )
        .await?;
    let contact = first_row(rows, row_to_contact)
        .await?
        .ok_or(DatabaseError::NoResult)?;
    tracing::debug!(owner = user.id, id = contact.id, "created contact");
    Ok(contact)
}

/// Overwrite every field of an owned contact from `body`.
///
/// Returns `None` without writing when `user` owns no contact `contact_id`.
pub async fn update(
    contact_id: i64,
    body: &ContactInput,
    db: &Session,
    user: &User,
) -> Result<Option<Contact>, DatabaseError> {
    let sql = format!(
        "UPDATE contacts
         SET first_name = ?1, last_name = ?2, email = ?3, phone = ?4,
             birthday = ?5, additional_data = ?6, updated_at = ?7
         WHERE id = ?8 AND user_id = ?9
         RETURNING {COLUMNS}"
    );
    let rows = db
        .conn()
        .query(
            &sql,
            libsql::params![
                body.first_name.as_str(),
                body.last_name.as_str(),
                body.email.as_str(),
                body.phone.as_str(),
                format_date(body.birthday),
                body.additional_data.as_deref(),
                Utc::now().to_rfc3339(),
                contact_id,
                user.id
            ],
        )
        .await?;
    let contact = first_row(rows, row_to_contact).await?;
    tracing::debug!(owner = user.id, id = contact_id, found = contact.is_some(), "update contact");
    Ok(contact)
}

/// Hard-delete an owned contact and return the removed row.
pub async fn delete(
    contact_id: i64,
    db: &Session,
    user: &User,
) -> Result<Option<Contact>, DatabaseError> {
    let sql = format!("DELETE FROM contacts WHERE id = ?1 AND user_id = ?2 RETURNING {COLUMNS}");
    let rows = db
        .conn()
        .query(&sql, libsql::params![contact_id, user.id])
        .await?;
    let contact = first_row(rows, row_to_contact).await?;
    tracing::debug!(owner = user.id, id = contact_id, found = contact.is_some(), "delete contact");
    Ok(contact)
}

/// Owned contacts whose first name, last name, or email contains `query`,
/// ignoring case. An empty query matches every owned contact.
///
/// Case folding happens here rather than in SQL: `SQLite` only folds ASCII,
/// so owned rows are read in id order and filtered with
/// [`str::to_lowercase`].
pub async fn search(
    query: &str,
    db: &Session,
    user: &User,
) -> Result<Vec<Contact>, DatabaseError> {
    let sql = format!("SELECT {COLUMNS} FROM contacts WHERE user_id = ?1 ORDER BY id");
    let rows = db.conn().query(&sql, [user.id]).await?;
    let folded = query.to_lowercase();
    let contacts: Vec<Contact> = collect_rows(rows, row_to_contact)
        .await?
        .into_iter()
        .filter(|c| {
            contains_folded(&c.first_name, &folded)
                || contains_folded(&c.last_name, &folded)
                || contains_folded(&c.email, &folded)
        })
        .collect();
    tracing::debug!(owner = user.id, rows = contacts.len(), "searched contacts");
    Ok(contacts)
}

/// Owned contacts with a birthday between today and `count_of_days` from
/// now, inclusive, using the local calendar date.
pub async fn upcoming_birthdays(
    count_of_days: u32,
    limit: u32,
    offset: u32,
    db: &Session,
    user: &User,
) -> Result<Vec<Contact>, DatabaseError> {
    let today = Local::now().date_naive();
    upcoming_birthdays_from(today, count_of_days, limit, offset, db, user).await
}

/// [`upcoming_birthdays`] with an explicit "today".
pub async fn upcoming_birthdays_from(
    today: NaiveDate,
    count_of_days: u32,
    limit: u32,
    offset: u32,
    db: &Session,
    user: &User,
) -> Result<Vec<Contact>, DatabaseError> {
    let window = BirthdayWindow::starting(today, count_of_days);
    let (predicate, [start, end]) = window.predicate("strftime('%m-%d', birthday)", 2);
    let sql = format!(
        "SELECT {COLUMNS} FROM contacts
         WHERE user_id = ?1 AND {predicate}
         ORDER BY id LIMIT ?4 OFFSET ?5"
    );
    let rows = db
        .conn()
        .query(
            &sql,
            libsql::params![user.id, start, end, i64::from(limit), i64::from(offset)],
        )
        .await?;
    let contacts = collect_rows(rows, row_to_contact).await?;
    tracing::debug!(
        owner = user.id,
        ?window,
        rows = contacts.len(),
        "listed upcoming birthdays"
    );
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{
        count_contacts, sample_input, seed_user, test_db, ymd,
    };

    #[tokio::test]
    async fn create_contact_roundtrip() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;

        let created = create(&sample_input("Ann", "Lee"), &session, &ann)
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.user_id, ann.id);
        assert_eq!(created.first_name, "Ann");
        assert_eq!(created.birthday, ymd(1990, 4, 12));
        assert_eq!(created.created_at, created.updated_at);

        let fetched = get(created.id, &session, &ann).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn create_forces_owner_to_acting_user() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let bob = seed_user(&session, "bob").await;

        let created = create(&sample_input("Carl", "Ray"), &session, &bob)
            .await
            .unwrap();
        assert_eq!(created.user_id, bob.id);
        assert_eq!(get(created.id, &session, &ann).await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_keeps_missing_notes_null() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;

        let mut body = sample_input("Ann", "Lee");
        body.additional_data = None;
        let created = create(&body, &session, &ann).await.unwrap();
        assert_eq!(created.additional_data, None);
    }

    #[tokio::test]
    async fn create_for_unknown_owner_fails() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let mut ghost = seed_user(&session, "ghost").await;
        ghost.id += 1000;

        let result = create(&sample_input("Ann", "Lee"), &session, &ghost).await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
        assert_eq!(count_contacts(&session).await, 0);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let created = create(&sample_input("Ann", "Lee"), &session, &ann)
            .await
            .unwrap();

        let body = ContactInput {
            first_name: "Anna".into(),
            last_name: "Leigh".into(),
            email: "anna@example.org".into(),
            phone: "555-0100".into(),
            birthday: ymd(1991, 5, 13),
            additional_data: None,
        };
        let updated = update(created.id, &body, &session, &ann)
            .await
            .unwrap()
            .expect("owned contact should update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_id, ann.id);
        assert_eq!(updated.first_name, "Anna");
        assert_eq!(updated.last_name, "Leigh");
        assert_eq!(updated.email, "anna@example.org");
        assert_eq!(updated.phone, "555-0100");
        assert_eq!(updated.birthday, ymd(1991, 5, 13));
        assert_eq!(updated.additional_data, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        let fetched = get(created.id, &session, &ann).await.unwrap();
        assert_eq!(fetched, Some(updated));
    }

    #[tokio::test]
    async fn update_of_foreign_contact_writes_nothing() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let bob = seed_user(&session, "bob").await;
        let created = create(&sample_input("Ann", "Lee"), &session, &ann)
            .await
            .unwrap();

        let result = update(created.id, &sample_input("Mallory", "X"), &session, &bob)
            .await
            .unwrap();
        assert_eq!(result, None);

        let unchanged = get(created.id, &session, &ann).await.unwrap();
        assert_eq!(unchanged, Some(created));
    }

    #[tokio::test]
    async fn delete_returns_snapshot_once() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let created = create(&sample_input("Ann", "Lee"), &session, &ann)
            .await
            .unwrap();

        let removed = delete(created.id, &session, &ann).await.unwrap();
        assert_eq!(removed, Some(created.clone()));
        assert_eq!(get(created.id, &session, &ann).await.unwrap(), None);
        assert_eq!(delete(created.id, &session, &ann).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_foreign_contact_is_refused() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let bob = seed_user(&session, "bob").await;
        let created = create(&sample_input("Ann", "Lee"), &session, &ann)
            .await
            .unwrap();

        assert_eq!(delete(created.id, &session, &bob).await.unwrap(), None);
        assert_eq!(count_contacts(&session).await, 1);
    }

    #[tokio::test]
    async fn list_all_crosses_owners() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let bob = seed_user(&session, "bob").await;
        create(&sample_input("A", "One"), &session, &ann).await.unwrap();
        create(&sample_input("B", "Two"), &session, &bob).await.unwrap();
        create(&sample_input("C", "Three"), &session, &ann).await.unwrap();

        let everyone = list_all(10, 0, &session).await.unwrap();
        assert_eq!(everyone.len(), 3);
        let owners: Vec<i64> = everyone.iter().map(|c| c.user_id).collect();
        assert_eq!(owners, vec![ann.id, bob.id, ann.id]);

        let page = list_all(1, 2, &session).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].first_name, "C");

        let mine = list_for_user(10, 0, &session, &ann).await.unwrap();
        assert_eq!(mine.len(), 2);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        create(&sample_input("100%", "Real"), &session, &ann).await.unwrap();
        create(&sample_input("1000", "Other"), &session, &ann).await.unwrap();
        create(&sample_input("snake_case", "Dev"), &session, &ann).await.unwrap();
        create(&sample_input("snakeXcase", "Dev"), &session, &ann).await.unwrap();

        let percent = search("0%", &session, &ann).await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].first_name, "100%");

        let underscore = search("e_c", &session, &ann).await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].first_name, "snake_case");
    }

    #[tokio::test]
    async fn search_folds_non_ascii_case() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        create(&sample_input("Олена", "Шевченко"), &session, &ann).await.unwrap();
        create(&sample_input("Ölaf", "Müller"), &session, &ann).await.unwrap();
        create(&sample_input("Ann", "Lee"), &session, &ann).await.unwrap();

        for (query, expected) in [
            ("олена", "Олена"),
            ("ОЛЕНА", "Олена"),
            ("ölaf", "Ölaf"),
            ("MÜLLER", "Ölaf"),
            ("ANN", "Ann"),
        ] {
            let found = search(query, &session, &ann).await.unwrap();
            let names: Vec<&str> = found.iter().map(|c| c.first_name.as_str()).collect();
            assert_eq!(names, vec![expected], "query {query:?}");
        }
    }

    #[tokio::test]
    async fn upcoming_birthdays_respects_pagination() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let today = ymd(2026, 3, 10);

        for name in ["A", "B", "C"] {
            let mut body = sample_input(name, "Soon");
            body.birthday = ymd(1985, 3, 11);
            create(&body, &session, &ann).await.unwrap();
        }

        let page = upcoming_birthdays_from(today, 2, 1, 1, &session, &ann)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].first_name, "B");
    }

    #[tokio::test]
    async fn upcoming_birthdays_uses_the_local_date() {
        let db = test_db().await;
        let session = db.session().await.unwrap();
        let ann = seed_user(&session, "ann").await;
        let today = Local::now().date_naive();

        let mut body = sample_input("Today", "Born");
        // 1996 is a leap year, so this also holds on Feb 29.
        body.birthday = today.with_year(1996).unwrap();
        create(&body, &session, &ann).await.unwrap();

        let found = upcoming_birthdays(0, 10, 0, &session, &ann).await.unwrap();
        // The repository reads the clock again; a midnight rollover in
        // between moves its window, so only assert on a stable date.
        if Local::now().date_naive() == today {
            assert_eq!(found.len(), 1);
        }
    }
}
