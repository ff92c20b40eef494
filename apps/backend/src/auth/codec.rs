//! Canonical base64url codec for token segments.
//!
//! Segments travel without `=` padding. Decoding re-adds the padding the
//! segment length implies and then decodes strictly, so non-alphabet
//! characters and non-canonical trailing bits are rejected.

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A base64 segment can never have `len % 4 == 1`.
    #[error("impossible base64url length {0}")]
    InvalidLength(usize),
    #[error("invalid base64url input: {0}")]
    Invalid(#[from] base64::DecodeError),
}

/// Encode raw bytes as unpadded base64url.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
pub fn decode(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let padding = (4 - segment.len() % 4) % 4;
    if padding == 3 {
        return Err(DecodeError::InvalidLength(segment.len()));
    }

    let mut padded = String::with_capacity(segment.len() + padding);
    padded.push_str(segment);
    padded.extend(std::iter::repeat('=').take(padding));

    Ok(URL_SAFE.decode(padded)?)
}

/// True if every character belongs to the unpadded base64url alphabet.
pub fn is_base64url(segment: &str) -> bool {
    segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
