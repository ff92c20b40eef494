use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    name: String,
    version: String,
}

pub async fn root(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    debug!(endpoint = "/", "endpoint_access");
    Ok(HttpResponse::Ok().json(RootResponse {
        message: format!("Welcome to {}!", app_state.app.name),
    }))
}

pub async fn health() -> Result<HttpResponse, AppError> {
    debug!(endpoint = "health", status = "ok", "endpoint_access");
    Ok(HttpResponse::Ok().json(HealthResponse { status: "ok" }))
}

pub async fn version(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(VersionResponse {
        name: app_state.app.name.clone(),
        version: app_state.app.version.clone(),
    }))
}
