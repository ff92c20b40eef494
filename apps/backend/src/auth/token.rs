//! Compact HS256 token issuance and verification.
//!
//! Wire format: `b64url(header_json).b64url(payload_json).b64url(hmac)`,
//! where the HMAC covers the first two encoded segments exactly as they
//! appear on the wire.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use super::claims::{Claims, HEADER};
use super::codec;
use super::error::AuthError;
use super::signer;

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("token expiry overflows: iat={iat}, expires_minutes={expires_minutes}")]
    ExpiryOverflow { iat: i64, expires_minutes: i64 },
    #[error("failed to serialize token segment: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Issue a token for `subject` valid for `expires_minutes` from now.
pub fn issue(subject: &str, secret: &[u8], expires_minutes: i64) -> Result<String, IssueError> {
    issue_at(subject, secret, expires_minutes, SystemTime::now())
}

/// Issue a token as if the current time were `now`.
pub fn issue_at(
    subject: &str,
    secret: &[u8],
    expires_minutes: i64,
    now: SystemTime,
) -> Result<String, IssueError> {
    let iat = unix_seconds(now);
    let exp = expires_minutes
        .checked_mul(60)
        .and_then(|secs| iat.checked_add(secs))
        .ok_or(IssueError::ExpiryOverflow {
            iat,
            expires_minutes,
        })?;

    let claims = Claims::new(subject, iat, exp);

    let header_b64 = codec::encode(&serde_json::to_vec(&HEADER)?);
    let payload_b64 = codec::encode(&serde_json::to_vec(&claims)?);
    let signing_input = format!("{header_b64}.{payload_b64}");
    let signature = signer::sign(signing_input.as_bytes(), secret);

    Ok(format!("{signing_input}.{}", codec::encode(&signature)))
}

/// Verify `token` against `secret` at the current time.
pub fn verify(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    verify_at(token, secret, SystemTime::now())
}

/// Verify `token` as if the current time were `now`.
pub fn verify_at(token: &str, secret: &[u8], now: SystemTime) -> Result<Claims, AuthError> {
    let mut segments = token.split('.');
    let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::MalformedToken("expected three segments"));
    };

    for segment in [header_b64, payload_b64, signature_b64] {
        if segment.is_empty() {
            return Err(AuthError::MalformedToken("empty segment"));
        }
        if !codec::is_base64url(segment) {
            return Err(AuthError::MalformedToken("segment is not base64url"));
        }
    }

    // Raw wire bytes of "header.payload", never a re-serialization.
    let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
    let signature = codec::decode(signature_b64)?;
    if !signer::verify_signature(signing_input.as_bytes(), secret, &signature) {
        return Err(AuthError::InvalidSignature);
    }

    let payload = codec::decode(payload_b64)
        .map_err(|_| AuthError::MalformedToken("payload is not base64url"))?;
    let claims: Claims = serde_json::from_slice(&payload)
        .map_err(|_| AuthError::MalformedToken("payload is not a claims object"))?;

    let now = unix_seconds(now);
    if claims.exp <= now {
        return Err(AuthError::ExpiredToken {
            exp: claims.exp,
            now,
        });
    }

    Ok(claims)
}

/// Whole seconds since the Unix epoch; negative before it.
fn unix_seconds(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
        Err(e) => i64::try_from(e.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}
