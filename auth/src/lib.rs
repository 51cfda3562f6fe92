//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the account service:
//! - Password hashing (Argon2id, fixed cost, random salt)
//! - JWT issuance and `Bearer` header validation pinned to the HMAC family
//! - Authentication coordination, including the decoy check for unknown accounts
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new().unwrap();
//! let hash = hasher.hash("Password123!").unwrap();
//! assert!(hasher.verify("Password123!", &hash));
//! assert!(!hasher.verify("Password123?", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let token = handler.encode(&Claims::for_user(42, 24)).unwrap();
//! let validated = handler.decode_bearer(&format!("Bearer {token}")).unwrap();
//! assert_eq!(validated.claim("id").unwrap(), "42");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, StoredCredentials};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("Password123!").unwrap();
//!
//! // Login: verify and generate token
//! let credentials = StoredCredentials { subject: "42".to_string(), password_hash: &hash };
//! let result = auth.authenticate("Password123!", Some(credentials)).unwrap();
//!
//! // Validate token
//! let header = format!("Bearer {}", result.access_token);
//! assert_eq!(auth.validate_bearer(&header).unwrap().claim("id").unwrap(), "42");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::StoredCredentials;
pub use jwt::claims::USER_ID_CLAIM;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::ValidatedToken;
pub use password::PasswordError;
pub use password::PasswordHasher;
