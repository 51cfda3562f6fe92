use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim carrying the string-encoded user identifier.
pub const USER_ID_CLAIM: &str = "id";

/// JWT claims structure.
///
/// Expiration is mandatory; every other value lives in the flattened `extra`
/// map and is looked up by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create claims expiring at the given Unix timestamp.
    pub fn expiring_at(exp: i64) -> Self {
        Self {
            exp,
            iat: None,
            extra: HashMap::new(),
        }
    }

    /// Create claims for an authenticated user with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - User identifier, stored as a string under `id`
    /// * `expiration_hours` - Hours until token expires
    ///
    /// # Returns
    /// Claims with id, exp, and iat set
    pub fn for_user(user_id: impl ToString, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self::expiring_at(expiration.timestamp())
            .with_issued_at(now.timestamp())
            .with_extra(USER_ID_CLAIM, user_id.to_string())
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Look up a string-valued custom claim.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(|v| v.as_str())
    }
}
