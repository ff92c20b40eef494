//! Per-request tracing span middleware.
//!
//! Creates a span named "request" carrying `trace_id`, `method`, `path`
//! and an initially empty `user`, and instruments the downstream future so
//! every event inside handlers inherits these fields. `RequireAuth` fills
//! in `user` once a token verifies.
//!
//! Ordering: expects `RequestTrace` to have already inserted a `String`
//! trace id into `req.extensions()`, so `RequestTrace` must wrap outside:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(TraceSpan)      // reads trace_id and creates the span
//!     .wrap(RequestTrace)   // generates + stores trace_id, sets header

use std::future::{ready, Ready};
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use actix_web::HttpMessage;
use futures_util::future::LocalBoxFuture;
use tracing::{field, info_span, Instrument, Span};

#[derive(Clone, Default)]
pub struct TraceSpan;

impl<S, B> Transform<S, ServiceRequest> for TraceSpan
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceSpanMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceSpanMiddleware { service }))
    }
}

pub struct TraceSpanMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceSpanMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "missing-trace-id".to_string());

        let method = req.method().clone();
        let path = req.path().to_string();

        let span: Span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %method,
            path = %path,
            user = field::Empty
        );

        let fut = self.service.call(req).instrument(span);

        Box::pin(fut)
    }
}
