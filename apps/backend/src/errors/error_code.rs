//! Error codes for the IrriControl API.
//!
//! Every code that can appear in a problem-details body is listed here;
//! handlers never pass ad-hoc strings.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Any bearer-token failure on a protected route
    Unauthorized,
    /// Wrong username or password at login
    InvalidCredentials,

    // Request validation
    /// Body could not be read or parsed
    BadRequest,
    /// Body parsed but a field is unusable
    ValidationError,
    /// Body exceeds the accepted size
    PayloadTooLarge,

    // System
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 7] = [
        Self::Unauthorized,
        Self::InvalidCredentials,
        Self::BadRequest,
        Self::ValidationError,
        Self::PayloadTooLarge,
        Self::Internal,
        Self::ConfigError,
    ];

    /// Canonical SCREAMING_SNAKE_CASE string used in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
