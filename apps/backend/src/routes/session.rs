use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::AuthContext;

#[derive(Debug, Serialize)]
struct SessionResponse {
    sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
    exp: i64,
}

/// Claims of the token the caller authenticated with.
async fn me(auth: AuthContext) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(SessionResponse {
        sub: auth.subject,
        iat: auth.claims.iat,
        exp: auth.claims.exp,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me));
}
