//! Bearer-token gate for protected scopes.
//!
//! Verifies the `Authorization: Bearer <token>` credential against the
//! configured secret. On success the request gets an [`AuthContext`]
//! extension and the current span's `user` field is filled in. On failure
//! the request never reaches the wrapped service: the gate logs the reason
//! and answers with the generic `401` problem response.
//!
//! The work happens inside the returned future, not in `call`, so that it
//! runs under the trace scope opened by `RequestTrace`.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, Span};

use crate::auth::{self, AuthError};
use crate::error::AppError;
use crate::extractors::AuthContext;
use crate::logging::security;
use crate::state::AppState;

pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                let err = AppError::internal("AppState not registered for protected scope");
                return Ok(req.error_response(err).map_into_right_body());
            };

            match authenticate(req.headers().get(header::AUTHORIZATION), &state) {
                Ok(ctx) => {
                    Span::current().record("user", ctx.subject.as_str());
                    debug!(user = %ctx.subject, exp = ctx.claims.exp, "bearer token accepted");
                    req.extensions_mut().insert(ctx);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    security::auth_rejected(&err, req.path());
                    let response = AppError::from(err).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(header: Option<&HeaderValue>, state: &AppState) -> Result<AuthContext, AuthError> {
    let token = extract_bearer(header).ok_or(AuthError::MissingCredential)?;
    let claims = auth::verify(token, &state.security.jwt_secret)?;
    Ok(AuthContext::from(claims))
}

/// Pull the credential out of an `Authorization` header value.
///
/// The scheme is matched case-insensitively. A missing header, a header
/// that is not visible ASCII, another scheme or an empty credential all
/// yield `None`.
pub fn extract_bearer(header: Option<&HeaderValue>) -> Option<&str> {
    let value = header?.to_str().ok()?.trim();
    let (scheme, credential) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let credential = credential.trim();
    (!credential.is_empty()).then_some(credential)
}
