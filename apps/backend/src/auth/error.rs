use thiserror::Error;

use super::codec::DecodeError;

/// Why a request failed authentication.
///
/// The variants exist for diagnostics only. At the HTTP boundary every
/// variant renders the same `401` response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing bearer credential")]
    MissingCredential,
    #[error("malformed token: {0}")]
    MalformedToken(&'static str),
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token expired at {exp} (now {now})")]
    ExpiredToken { exp: i64, now: i64 },
    #[error("token signature is not valid base64url: {0}")]
    Decode(#[from] DecodeError),
}

impl AuthError {
    /// Stable label for structured log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "missing_credential",
            AuthError::MalformedToken(_) => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::ExpiredToken { .. } => "expired_token",
            AuthError::Decode(_) => "decode_error",
        }
    }
}
