use actix_web::error::ResponseError;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::auth::{AuthError, IssueError};
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Bearer-token failure. The cause is kept for logs, never rendered.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::BadRequest { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Client-facing detail. Server-side failures are reported generically.
    fn detail(&self) -> String {
        match self {
            AppError::Unauthorized(_) => "Authentication required".to_string(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { code, .. } => match code {
                ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            },
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn unauthorized(cause: AuthError) -> Self {
        Self::Unauthorized(cause)
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn problem_details(&self, trace_id: String) -> ProblemDetails {
        let code = self.code().as_str();
        ProblemDetails {
            type_: format!("https://irricontrol.app/errors/{code}"),
            title: Self::humanize_code(code),
            status: self.status().as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id,
        }
    }
}

impl From<IssueError> for AppError {
    fn from(e: IssueError) -> Self {
        AppError::internal(format!("token issuance failed: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, code = %self.code(), error = %self, "request failed");
        }

        let problem_details = self.problem_details(trace_id.clone());

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(problem_details)
    }
}
