use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Plaintext hashed once to produce the decoy used for unknown accounts.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Password hashing implementation.
///
/// Argon2id with fixed cost parameters (19 MiB memory, 2 iterations, 1 lane),
/// which keeps a single verification in the low hundreds of milliseconds on
/// commodity hardware. Every hash gets a fresh random salt.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy_hash: String,
}

impl PasswordHasher {
    /// Create a new password hasher instance.
    ///
    /// The decoy hash used for unknown accounts is computed here, so the
    /// first lookup miss costs the same as every other one.
    ///
    /// # Returns
    /// PasswordHasher instance configured with the fixed cost parameters
    ///
    /// # Errors
    /// * `HashingFailed` - The decoy hash could not be computed
    pub fn new() -> Result<Self, PasswordError> {
        let mut hasher = Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT),
            decoy_hash: String::new(),
        };
        hasher.decoy_hash = hasher.hash(DECOY_PASSWORD)?;

        Ok(hasher)
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored hash that is not a valid PHC string never matches.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed_hash) => parsed_hash,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Verify a password against an optional stored hash.
    ///
    /// When there is no stored hash the password is still checked against a
    /// decoy hash, so a lookup miss costs the same as a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash, if an account was found
    ///
    /// # Returns
    /// True only if a stored hash was given and the password matches it
    pub fn verify_or_decoy(&self, password: &str, hash: Option<&str>) -> bool {
        match hash {
            Some(hash) => self.verify(password, hash),
            None => {
                let _ = self.verify(password, self.decoy_hash());
                false
            }
        }
    }

    fn decoy_hash(&self) -> &str {
        &self.decoy_hash
    }
}
