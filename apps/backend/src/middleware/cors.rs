use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the configured origins.
///
/// A `*` entry allows any origin. Credentials are allowed either way, so
/// actix-cors echoes the request origin rather than sending a literal `*`.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .supports_credentials()
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
