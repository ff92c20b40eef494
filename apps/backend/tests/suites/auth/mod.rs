pub mod end_to_end;
pub mod login;
pub mod require_auth;
