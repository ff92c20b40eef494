//! HMAC-SHA256 signing over the token signing input.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of an HMAC-SHA256 digest.
pub const SIGNATURE_LEN: usize = 32;

/// Compute the HMAC-SHA256 digest of `message` keyed by `secret`.
pub fn sign(message: &[u8], secret: &[u8]) -> [u8; SIGNATURE_LEN] {
    // HMAC accepts keys of any length, so construction cannot fail
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Recompute the digest and compare it against `candidate` in constant time.
pub fn verify_signature(message: &[u8], secret: &[u8], candidate: &[u8]) -> bool {
    let expected = sign(message, secret);
    constant_time_eq(&expected, candidate)
}

/// Byte comparison whose timing does not depend on where the inputs differ.
///
/// Only the lengths are compared eagerly; lengths are public for signatures
/// and credentials alike.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
