use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 4;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^ ]+@[^ ]+\.[a-z]{2,3}$").expect("valid email pattern"));

/// A registered account. Credentials are stored in plaintext in a local,
/// user-readable file; this is deliberate, there is no security model here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Raw registration-form fields as typed by the user
#[derive(Debug, Clone, Default)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Reasons an auth submission is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 4 characters")]
    WeakPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username or email already exists")]
    AlreadyRegistered,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Validate a registration against the existing accounts.
///
/// Username and email uniqueness are case-sensitive matches.
pub fn validate_registration(
    existing: &[User],
    input: &RegistrationInput,
) -> Result<User, AuthError> {
    let username = input.username.trim();
    let email = input.email.trim();
    let password = input.password.trim();
    let confirm = input.confirm.trim();

    if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(AuthError::MissingFields);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AuthError::InvalidEmail);
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    if existing
        .iter()
        .any(|u| u.username == username || u.email == email)
    {
        return Err(AuthError::AlreadyRegistered);
    }

    Ok(User {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Look up a user whose username and password both match exactly.
///
/// The failure is a single generic error; callers must not distinguish an
/// unknown user from a wrong password.
pub fn authenticate<'a>(
    users: &'a [User],
    username: &str,
    password: &str,
) -> Result<&'a User, AuthError> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingFields);
    }

    users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .ok_or(AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registration(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationInput {
        RegistrationInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm: confirm.to_string(),
        }
    }

    #[test]
    fn test_register_then_login() {
        let user =
            validate_registration(&[], &registration("ana", "ana@mail.com", "s3cret", "s3cret"))
                .unwrap();
        let users = vec![user];

        let found = authenticate(&users, "ana", "s3cret").unwrap();
        assert_eq!(found.username, "ana");
        assert_eq!(found.email, "ana@mail.com");
    }

    #[test]
    fn test_wrong_password_is_generic_failure() {
        let users = vec![User {
            username: "ana".to_string(),
            email: "ana@mail.com".to_string(),
            password: "s3cret".to_string(),
        }];

        assert_eq!(
            authenticate(&users, "ana", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        // Unknown user produces the same error
        assert_eq!(
            authenticate(&users, "bob", "s3cret"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_blank_fields() {
        assert_eq!(authenticate(&[], "", "pw"), Err(AuthError::MissingFields));
        assert_eq!(authenticate(&[], "ana", "  "), Err(AuthError::MissingFields));
    }

    #[test]
    fn test_registration_rejects_bad_email() {
        for email in ["not-an-email", "a b@mail.com", "user@mail", "user@mail.toolong"] {
            assert_eq!(
                validate_registration(&[], &registration("ana", email, "s3cret", "s3cret")),
                Err(AuthError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_registration_rejects_weak_password() {
        assert_eq!(
            validate_registration(&[], &registration("ana", "ana@mail.com", "abc", "abc")),
            Err(AuthError::WeakPassword)
        );
    }

    #[test]
    fn test_registration_rejects_mismatched_confirmation() {
        assert_eq!(
            validate_registration(&[], &registration("ana", "ana@mail.com", "s3cret", "s3cre7")),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[test]
    fn test_registration_rejects_existing_username_or_email() {
        let existing = vec![User {
            username: "ana".to_string(),
            email: "ana@mail.com".to_string(),
            password: "s3cret".to_string(),
        }];

        assert_eq!(
            validate_registration(
                &existing,
                &registration("ana", "other@mail.com", "s3cret", "s3cret")
            ),
            Err(AuthError::AlreadyRegistered)
        );
        assert_eq!(
            validate_registration(
                &existing,
                &registration("bob", "ana@mail.com", "s3cret", "s3cret")
            ),
            Err(AuthError::AlreadyRegistered)
        );
        // Uniqueness check is case-sensitive
        assert!(validate_registration(
            &existing,
            &registration("Ana", "Ana@mail.com", "s3cret", "s3cret")
        )
        .is_ok());
    }
}
