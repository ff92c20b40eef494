//! Application configuration loaded once from environment variables.
//!
//! `from_env` is what the binary calls. `from_lookup` takes any variable
//! source so tests never touch the process environment.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;
use crate::state::{AdminCredentials, AppInfo, SecurityConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Working directories created at startup, plus the root served under
/// `/static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
    pub images_dir: PathBuf,
    pub files_dir: PathBuf,
    pub simulations_cache_dir: PathBuf,
    pub elevation_cache_dir: PathBuf,
}

impl StorageConfig {
    /// Each directory created at startup, paired with the variable that
    /// configures it.
    pub fn entries(&self) -> [(&'static str, &PathBuf); 4] {
        [
            ("IMAGES_DIR", &self.images_dir),
            ("FILES_DIR", &self.files_dir),
            ("SIMULATIONS_CACHE_DIR", &self.simulations_cache_dir),
            ("ELEVATION_CACHE_DIR", &self.elevation_cache_dir),
        ]
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            images_dir: PathBuf::from("static/imagens"),
            files_dir: PathBuf::from("static/arquivos"),
            simulations_cache_dir: PathBuf::from("cache/simulations"),
            elevation_cache_dir: PathBuf::from("cache/elevation"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Server
    pub host: String,
    pub port: u16,

    pub app: AppInfo,
    pub security: SecurityConfig,

    /// Allowed CORS origins; `*` means any
    pub cors_origins: Vec<String>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string());
        let or_default = |name: &str, default: &str| {
            var(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host = or_default("BACKEND_HOST", DEFAULT_HOST);
        let port = match var("BACKEND_PORT").filter(|v| !v.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!(
                    "BACKEND_PORT must be a valid port number, got '{raw}'"
                ))
            })?,
        };

        let defaults = AppInfo::default();
        let app = AppInfo {
            name: or_default("APP_NAME", &defaults.name),
            version: or_default("APP_VERSION", &defaults.version),
            api_prefix: normalize_prefix(&or_default("API_V1_STR", &defaults.api_prefix))?,
        };

        let security = Self::security(&lookup, &var)?;

        let cors_origins = parse_allowed_origins(var("ALLOWED_ORIGINS").as_deref());
        let log_level = or_default("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        let storage_defaults = StorageConfig::default();
        let dir = |name: &str, default: &PathBuf| {
            var(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| default.clone())
        };
        let storage = StorageConfig {
            static_dir: dir("STATIC_DIR", &storage_defaults.static_dir),
            images_dir: dir("IMAGES_DIR", &storage_defaults.images_dir),
            files_dir: dir("FILES_DIR", &storage_defaults.files_dir),
            simulations_cache_dir: dir(
                "SIMULATIONS_CACHE_DIR",
                &storage_defaults.simulations_cache_dir,
            ),
            elevation_cache_dir: dir("ELEVATION_CACHE_DIR", &storage_defaults.elevation_cache_dir),
        };

        Ok(AppConfig {
            host,
            port,
            app,
            security,
            cors_origins,
            log_level,
            storage,
        })
    }

    /// Secrets and credentials are taken verbatim from `raw`; surrounding
    /// whitespace is part of the value. Blank values are still rejected.
    fn security(
        raw: &dyn Fn(&str) -> Option<String>,
        var: &dyn Fn(&str) -> Option<String>,
    ) -> Result<SecurityConfig, AppError> {
        let required = |name: &str| {
            raw(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AppError::config(format!("{name} must be set and non-empty")))
        };

        let jwt_secret = required("AUTH_JWT_SECRET")?;
        let username = required("AUTH_ADMIN_USER")?;
        let password = required("AUTH_ADMIN_PASSWORD")?;

        let expires_minutes = match var("AUTH_JWT_EXPIRES_MIN").filter(|v| !v.is_empty()) {
            None => SecurityConfig::DEFAULT_EXPIRES_MINUTES,
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                AppError::config(format!(
                    "AUTH_JWT_EXPIRES_MIN must be an integer number of minutes, got '{raw}'"
                ))
            })?,
        };

        Ok(SecurityConfig::new(
            jwt_secret.into_bytes(),
            expires_minutes,
            AdminCredentials::new(username, password),
        ))
    }
}

/// Split a comma-separated origin list, dropping blanks. Falls back to the
/// local development origins when nothing usable is configured.
pub fn parse_allowed_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}

/// Ensure a leading slash and no trailing slash.
fn normalize_prefix(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        return Err(AppError::config(format!(
            "API_V1_STR must name a path prefix, got '{raw}'"
        )));
    }
    Ok(format!("/{trimmed}"))
}
