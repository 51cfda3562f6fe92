use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::UserIdError;
use crate::user::phone::normalize_phone_number;
use crate::user::validation::Field;
use crate::user::validation::Validate;
use crate::user::validation::FULL_NAME;
use crate::user::validation::PASSWORD;
use crate::user::validation::PHONE_NUMBER;

/// User aggregate entity.
///
/// Represents a registered account. The password hash is redacted from the
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub phone_number: PhoneNumber,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Store-assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from its string form, as carried in token claims.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number in normalized form.
///
/// Only constructible through normalization, so every stored or compared
/// phone number is already canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a raw phone number.
    pub fn normalize(raw: &str) -> Self {
        Self(normalize_phone_number(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record handed to the store when registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub phone_number: PhoneNumber,
    pub password_hash: String,
}

/// Mutable profile fields written by update-by-id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub full_name: String,
    pub phone_number: PhoneNumber,
}

/// Command to register a new user from raw request input.
pub struct RegisterUserCommand {
    pub full_name: String,
    pub password: String,
    pub phone_number: String,
}

impl RegisterUserCommand {
    pub fn new(full_name: String, password: String, phone_number: String) -> Self {
        Self {
            full_name,
            password,
            phone_number,
        }
    }
}

impl Validate for RegisterUserCommand {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(FULL_NAME, &self.full_name),
            Field::new(PASSWORD, &self.password),
            Field::new(PHONE_NUMBER, &self.phone_number),
        ]
    }
}

/// Command to log in with a phone number and password.
pub struct LoginCommand {
    pub phone_number: String,
    pub password: String,
}

impl Validate for LoginCommand {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(PHONE_NUMBER, &self.phone_number),
            Field::new(PASSWORD, &self.password),
        ]
    }
}

/// Command to update the authenticated user's profile.
///
/// Empty strings mean "leave unchanged"; at least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub full_name: String,
    pub phone_number: String,
}

impl UpdateUserCommand {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.phone_number.is_empty()
    }
}

impl Validate for UpdateUserCommand {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(FULL_NAME, &self.full_name),
            Field::new(PHONE_NUMBER, &self.phone_number),
        ]
    }
}

/// Successful login: the account id and its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user_id: UserId,
    pub token: String,
}
