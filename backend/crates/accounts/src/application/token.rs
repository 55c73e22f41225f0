//! Access Token Codec
//!
//! Stateless bearer tokens: a JSON claim set, base64url encoded, signed
//! with HMAC-SHA256. Shape: `<payload>.<signature>`. No session table;
//! revocation happens by deleting the account, since the role and the
//! account's existence are re-checked against the database on every
//! request.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use kernel::role::Role;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AccountsError, AccountsResult};

type HmacSha256 = Hmac<Sha256>;

/// Signed token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Role at issue time; informational only, the database wins
    pub role: Role,
    /// Expiry as Unix epoch milliseconds
    pub exp_ms: i64,
}

impl TokenClaims {
    pub fn new(sub: Uuid, role: Role, ttl_ms: i64) -> Self {
        Self {
            sub,
            role,
            exp_ms: Utc::now().timestamp_millis() + ttl_ms,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.exp_ms
    }
}

/// Sign a claim set into a bearer token
pub fn issue(claims: &TokenClaims, secret: &[u8]) -> AccountsResult<String> {
    let payload = serde_json::to_vec(claims)
        .map_err(|e| AccountsError::Internal(format!("Token serialization failed: {e}")))?;
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!("{}.{}", payload_b64, URL_SAFE_NO_PAD.encode(signature)))
}

/// Verify a bearer token's signature and expiry, returning its claims
pub fn parse(token: &str, secret: &[u8]) -> AccountsResult<TokenClaims> {
    let (payload_b64, signature_b64) =
        token.split_once('.').ok_or(AccountsError::TokenInvalid)?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AccountsError::TokenInvalid)?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload_b64.as_bytes());
    mac.verify_slice(&signature)
        .map_err(|_| AccountsError::TokenInvalid)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|_| AccountsError::TokenInvalid)?;
    let claims: TokenClaims =
        serde_json::from_slice(&payload).map_err(|_| AccountsError::TokenInvalid)?;

    if claims.is_expired() {
        return Err(AccountsError::TokenInvalid);
    }

    Ok(claims)
}
