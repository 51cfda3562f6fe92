use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::user::validation::ValidationReport;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Client input errors
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationReport),

    #[error("{0}")]
    MalformedRequest(String),

    #[error("request cannot be empty")]
    EmptyUpdate,

    #[error("phone number is already registered")]
    PhoneNumberAlreadyRegistered,

    #[error("incorrect password or phone number")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized,

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    // Internal errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
