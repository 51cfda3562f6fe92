use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::ValidatedToken;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT handling.
///
/// Owns the token signing secret and lifetime, so callers never touch either
/// directly.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    expiration_hours: i64,
}

/// Stored credentials of an account that is attempting to log in.
pub struct StoredCredentials<'a> {
    /// Value written to the token's user id claim on success
    pub subject: String,
    /// Stored password hash
    pub password_hash: &'a str,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `expiration_hours` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `PasswordError` - The decoy hash could not be computed
    pub fn new(jwt_secret: &[u8], expiration_hours: i64) -> Result<Self, PasswordError> {
        Ok(Self {
            password_hasher: PasswordHasher::new()?,
            jwt_handler: JwtHandler::new(jwt_secret),
            expiration_hours,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the account.
    ///
    /// `credentials` is `None` when no account matched the login key; the
    /// password is then checked against a decoy hash and the attempt fails
    /// the same way a wrong password does.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account, or password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        credentials: Option<StoredCredentials<'_>>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let stored_hash = credentials.as_ref().map(|c| c.password_hash);

        if !self.password_hasher.verify_or_decoy(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let subject = credentials
            .map(|c| c.subject)
            .ok_or(AuthenticationError::InvalidCredentials)?;

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a signed token for a user, expiring after the configured lifetime.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, user_id: impl ToString) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, self.expiration_hours);
        self.jwt_handler.encode(&claims)
    }

    /// Validate the token carried by an `Authorization` header value.
    ///
    /// # Errors
    /// * `JwtError` - Header malformed, or token validation failed
    pub fn validate_bearer(&self, header: &str) -> Result<ValidatedToken, JwtError> {
        self.jwt_handler.decode_bearer(header)
    }
}
