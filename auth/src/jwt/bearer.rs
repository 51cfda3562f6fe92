use super::errors::JwtError;

const BEARER_SCHEME: &str = "Bearer";

/// Isolate the token from an `Authorization` header value.
///
/// The header must consist of exactly two space-separated parts,
/// `Bearer <token>`.
///
/// # Errors
/// * `MalformedHeader` - Wrong scheme, missing token, or extra parts
pub fn extract_bearer_token(header: &str) -> Result<&str, JwtError> {
    let mut parts = header.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(JwtError::MalformedHeader),
    }
}
