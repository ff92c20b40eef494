//! Token header and claims.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Subject reported for verified tokens that carry no `sub`.
pub const ANONYMOUS_SUBJECT: &str = "-";

/// Fixed token header. Emitted for format compatibility only; verification
/// never reads it, so the algorithm cannot be negotiated by the caller.
#[derive(Debug, Serialize)]
pub struct Header {
    pub alg: &'static str,
    pub typ: &'static str,
}

pub const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Claims carried in the token payload.
///
/// Field order is the serialization order, which feeds the signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Issued-at (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry (seconds since epoch); absent decodes as 0, which is always expired
    #[serde(default)]
    pub exp: i64,
    /// Any other keys present in a verified payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    pub fn new(subject: &str, iat: i64, exp: i64) -> Self {
        Self {
            sub: Some(subject.to_string()),
            iat: Some(iat),
            exp,
            extra: Map::new(),
        }
    }

    pub fn subject(&self) -> &str {
        self.sub.as_deref().unwrap_or(ANONYMOUS_SUBJECT)
    }
}
