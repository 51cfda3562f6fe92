use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::bearer::extract_bearer_token;
use super::claims::Claims;
use super::errors::JwtError;

/// Algorithms accepted when verifying a token. Anything outside the HMAC
/// family is rejected before the signature is looked at.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT token handler for encoding and decoding tokens.
///
/// Signs with HS256 (HMAC with SHA-256) using the secret given at construction.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

/// Claims of a token whose signature and expiry have been verified.
///
/// Only [`JwtHandler::decode`] produces this type, so holding one proves the
/// token was validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedToken(Claims);

impl ValidatedToken {
    /// Extract a named string claim.
    ///
    /// # Errors
    /// * `MissingClaim` - Claim is absent or not a string
    pub fn claim(&self, key: &str) -> Result<&str, JwtError> {
        self.0
            .get_str(key)
            .ok_or_else(|| JwtError::MissingClaim(key.to_string()))
    }

    /// Borrow the verified claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature must verify with the handler's secret under an HMAC
    /// algorithm, and `exp` must be present and not in the past (no leeway).
    ///
    /// # Errors
    /// * `TokenExpired` - Token has expired
    /// * `InvalidToken` - Signature or algorithm rejected
    /// * `DecodingFailed` - Token is malformed
    pub fn decode(&self, token: &str) -> Result<ValidatedToken, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    JwtError::InvalidToken(e.to_string())
                }
                _ => JwtError::DecodingFailed(e.to_string()),
            })?;

        Ok(ValidatedToken(token_data.claims))
    }

    /// Validate the token carried by an `Authorization: Bearer <token>` value.
    ///
    /// # Errors
    /// * `MalformedHeader` - Header is not `Bearer <token>`
    /// * Any error returned by [`JwtHandler::decode`]
    pub fn decode_bearer(&self, header: &str) -> Result<ValidatedToken, JwtError> {
        self.decode(extract_bearer_token(header)?)
    }
}
