use tracing::warn;

use crate::auth::AuthError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a rejected login attempt.
pub fn login_failed(username: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %Redacted(username),
        reason = "invalid_credentials",
        "Authentication failure"
    );
}

/// Log a request turned away by the auth gate.
pub fn auth_rejected(err: &AuthError, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_REJECTED",
        %trace_id,
        reason = err.reason(),
        path,
        error = %err,
        "Bearer token rejected"
    );
}
