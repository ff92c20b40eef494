use std::path::Path;

use actix_files::Files;
use actix_web::web;

use crate::middleware::RequireAuth;

pub mod auth;
pub mod health;
pub mod session;

/// Register every route under `api_prefix`, and `static_dir` under `/static`.
///
/// Open routes are registered first so they match before the protected
/// scope, which claims everything else under the prefix (unknown paths
/// included) behind `RequireAuth`.
pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, static_dir: &Path) {
    cfg.route("/", web::get().to(health::root));
    cfg.service(Files::new("/static", static_dir));
    cfg.service(
        web::resource(format!("{api_prefix}/health"))
            .route(web::get().to(health::health))
            .route(web::head().to(health::health)),
    );
    cfg.route(
        &format!("{api_prefix}/version"),
        web::get().to(health::version),
    );
    cfg.route(
        &format!("{api_prefix}/auth/login"),
        web::post().to(auth::login),
    );

    cfg.service(
        web::scope(api_prefix)
            .wrap(RequireAuth)
            .configure(configure_protected),
    );
}

/// Routes that require a verified bearer token, relative to the API prefix.
pub fn configure_protected(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").configure(session::configure_routes));
}
