use tracing::info;

use crate::config::AppConfig;

/// Log the effective configuration. Secrets and credentials are never
/// included.
pub fn log_startup_info(config: &AppConfig) {
    info!(
        app = %config.app.name,
        version = %config.app.version,
        api_prefix = %config.app.api_prefix,
        host = %config.host,
        port = config.port,
        "starting"
    );
    info!(
        allowed_origins = ?config.cors_origins,
        log_level = %config.log_level,
        token_lifetime_min = config.security.expires_minutes,
        static_dir = %config.storage.static_dir.display(),
        "effective configuration"
    );
}
