//! Error handling for the IrriControl API.

pub mod error_code;

pub use error_code::ErrorCode;
