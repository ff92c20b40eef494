use super::security_config::SecurityConfig;

/// Name, version and route prefix the API reports about itself.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    /// Prefix for every API route, e.g. `/api/v1`
    pub api_prefix: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "IrriControl API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_prefix: "/api/v1".to_string(),
        }
    }
}

/// Immutable state shared across workers via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub app: AppInfo,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(app: AppInfo, security: SecurityConfig) -> Self {
        Self { app, security }
    }

    /// Default app info with [`SecurityConfig::for_tests`].
    pub fn for_tests() -> Self {
        Self::new(AppInfo::default(), SecurityConfig::for_tests())
    }
}
