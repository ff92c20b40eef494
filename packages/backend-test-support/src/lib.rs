//! Backend test support utilities
//!
//! Idempotent test logging and assertions for the problem-details error
//! contract, shared by unit and integration tests.

pub mod logging;
pub mod problem_details;
