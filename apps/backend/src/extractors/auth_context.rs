use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::{AuthError, Claims};
use crate::error::AppError;

/// Identity of a request that passed `RequireAuth`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    /// `sub` claim, or `-` when the token carried none
    pub subject: String,
    pub claims: Claims,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.subject().to_string(),
            claims,
        }
    }
}

/// Reads the context `RequireAuth` stored in request extensions.
///
/// Used outside a gated scope there is nothing to read, and the request is
/// rejected as unauthenticated.
impl FromRequest for AuthContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or(AppError::Unauthorized(AuthError::MissingCredential)),
        )
    }
}
