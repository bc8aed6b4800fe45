//! Input validation for contact and user payloads.
//!
//! Repositories trust their inputs; callers run these checks before handing a
//! payload to the store.

use crate::entities::{ContactInput, NewUser};
use crate::errors::CoreError;

/// Maximum length of names, phone, email and username.
pub const MAX_FIELD_LEN: usize = 50;

/// Maximum length of the free-form notes field.
pub const MAX_NOTES_LEN: usize = 250;

impl ContactInput {
    /// Check field lengths and email shape.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_len("first_name", &self.first_name, 1, MAX_FIELD_LEN)?;
        check_len("last_name", &self.last_name, 1, MAX_FIELD_LEN)?;
        check_email("email", &self.email)?;
        check_len("phone", &self.phone, 1, MAX_FIELD_LEN)?;
        if let Some(notes) = &self.additional_data {
            check_len("additional_data", notes, 0, MAX_NOTES_LEN)?;
        }
        Ok(())
    }
}

impl NewUser {
    /// Check username length and email shape.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_len("username", &self.username, 1, MAX_FIELD_LEN)?;
        check_email("email", &self.email)
    }
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len < min {
        return Err(CoreError::validation(field, format!("must be at least {min} characters")));
    }
    if len > max {
        return Err(CoreError::validation(field, format!("must be at most {max} characters")));
    }
    Ok(())
}

fn check_email(field: &str, value: &str) -> Result<(), CoreError> {
    check_len(field, value, 3, MAX_FIELD_LEN)?;
    if !is_email_shaped(value) {
        return Err(CoreError::validation(field, format!("'{value}' is not a valid email address")));
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn input() -> ContactInput {
        ContactInput {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@example.com".into(),
            phone: "+380501234567".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            additional_data: Some("met at the conference".into()),
        }
    }

    #[test]
    fn valid_input_passes() {
        input().validate().unwrap();
    }

    #[test]
    fn empty_first_name_is_rejected() {
        let mut body = input();
        body.first_name.clear();
        let err = body.validate().unwrap_err();
        assert!(
            matches!(&err, CoreError::Validation { field, .. } if field == "first_name"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn notes_over_limit_are_rejected() {
        let mut body = input();
        body.additional_data = Some("x".repeat(MAX_NOTES_LEN + 1));
        assert!(body.validate().is_err());

        body.additional_data = Some("x".repeat(MAX_NOTES_LEN));
        body.validate().unwrap();
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut body = input();
        body.last_name = "Ї".repeat(MAX_FIELD_LEN);
        body.validate().unwrap();
    }

    #[rstest]
    #[case("ann@example.com", true)]
    #[case("a.b+tag@mail.example.org", true)]
    #[case("ann", false)]
    #[case("@example.com", false)]
    #[case("ann@localhost", false)]
    #[case("ann@@example.com", false)]
    #[case("ann@example..com", false)]
    #[case("ann lee@example.com", false)]
    fn email_shape(#[case] email: &str, #[case] ok: bool) {
        assert_eq!(is_email_shaped(email), ok, "{email}");
    }

    #[test]
    fn new_user_requires_email() {
        let user = NewUser {
            username: "ann".into(),
            email: "not-an-email".into(),
            role: crate::enums::Role::User,
        };
        assert!(user.validate().is_err());
    }
}
