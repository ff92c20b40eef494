//! Per-request trace id, carried in tokio task-local storage.
//!
//! `RequestTrace` opens the scope; anything running inside the request
//! future (handlers, extractors, the auth gate, error rendering) can read
//! the id without threading it through arguments.

use std::cell::RefCell;

use tokio::task_local;

/// Reported when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// Trace id of the current request, or `"unknown"` outside one.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` as the current trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}
