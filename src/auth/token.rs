//! Session token inspection
//!
//! The console holds no signing key; verifying the token is the server's
//! job. These helpers only read the expiry claim out of the payload, and
//! treat anything unreadable as already expired.

use crate::utils::error::{ConsoleError, Result};
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claims the console cares about
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
    /// Subject (user ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// User role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

fn try_decode(token: &str) -> Result<SessionClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| ConsoleError::TokenDecode(e.to_string()))
}

/// Decode the claims of a token without verifying its signature.
///
/// Returns `None` for anything that is not a structurally valid token with
/// a numeric `exp` claim; the decode failure never crosses this boundary.
pub fn decode_claims(token: &str) -> Option<SessionClaims> {
    match try_decode(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

/// Expiry instant embedded in a token, `None` on malformed input
pub fn expiry_of(token: &str) -> Option<DateTime<Utc>> {
    let claims = decode_claims(token)?;
    Utc.timestamp_opt(claims.exp, 0).single()
}

/// Whether a token's expiry has passed.
///
/// Malformed tokens are reported as expired.
pub fn is_expired(token: &str) -> bool {
    match expiry_of(token) {
        Some(expiry) => expiry <= Utc::now(),
        None => true,
    }
}

/// Time remaining until a token expires, `None` if malformed or already past
pub fn time_until_expiry(token: &str) -> Option<chrono::Duration> {
    let expiry = expiry_of(token)?;
    let remaining = expiry - Utc::now();
    if remaining > chrono::Duration::zero() {
        Some(remaining)
    } else {
        None
    }
}

/// Extract the token from an `Authorization` header value
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ")
}
