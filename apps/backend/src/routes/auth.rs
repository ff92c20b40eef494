use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Exchange the administrator credentials for a bearer token.
pub async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { username, password } = body.into_inner();
    let security_cfg = &app_state.security;

    if !security_cfg.admin.verify(&username, &password) {
        security::login_failed(&username);
        return Err(AppError::invalid_credentials());
    }

    let access_token = auth::issue(
        &username,
        &security_cfg.jwt_secret,
        security_cfg.expires_minutes,
    )?;

    info!(username = %Redacted(&username), "login succeeded");

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
