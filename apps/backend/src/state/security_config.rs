use std::fmt;

use crate::auth::signer::constant_time_eq;

/// The single administrator account accepted at login.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Compare a login attempt against the configured account.
    ///
    /// Both comparisons always run, so a wrong username costs the same as a
    /// wrong password.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &"<redacted>")
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token signing settings and login credentials.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Token lifetime in minutes
    pub expires_minutes: i64,
    pub admin: AdminCredentials,
}

impl SecurityConfig {
    pub const DEFAULT_EXPIRES_MINUTES: i64 = 60;

    pub fn new(jwt_secret: impl Into<Vec<u8>>, expires_minutes: i64, admin: AdminCredentials) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            expires_minutes,
            admin,
        }
    }

    /// Fixed settings for tests: admin/admin, 60 minute tokens.
    pub fn for_tests() -> Self {
        Self::new(
            b"test_secret_for_unit_tests_only".to_vec(),
            Self::DEFAULT_EXPIRES_MINUTES,
            AdminCredentials::new("admin", "admin"),
        )
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("expires_minutes", &self.expires_minutes)
            .field("admin", &self.admin)
            .finish()
    }
}
