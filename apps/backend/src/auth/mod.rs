//! Stateless bearer-token authentication.
//!
//! [`codec`] and [`signer`] are the primitives; [`token`] composes them into
//! issuance and verification. Nothing in here reads global configuration:
//! callers pass the secret and lifetime explicitly.

pub mod claims;
pub mod codec;
pub mod error;
pub mod signer;
pub mod token;

pub use claims::Claims;
pub use error::AuthError;
pub use token::{issue, verify, IssueError};
