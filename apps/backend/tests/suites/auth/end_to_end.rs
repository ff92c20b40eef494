// Full flow: login, use the token, watch it expire.

use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use actix_web::test::{call_service, read_body_json, TestRequest};
use irricontrol::auth::token::{issue_at, verify_at};
use irricontrol::auth::AuthError;
use irricontrol::routes::auth::LoginResponse;
use irricontrol::state::{AdminCredentials, AppInfo, AppState, SecurityConfig};
use serde_json::{json, Value};

use crate::common::assert_problem_details;
use crate::support::create_test_app;

#[test]
fn issued_token_verifies_until_expiry() {
    let secret = b"field-secret";
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let token = issue_at("alice", secret, 60, t0).unwrap();

    let claims = verify_at(&token, secret, t0).unwrap();
    assert_eq!(claims.subject(), "alice");
    assert_eq!(claims.exp, 1_700_003_600);

    let just_before = t0 + Duration::from_secs(3599);
    assert!(verify_at(&token, secret, just_before).is_ok());

    let past_exp = t0 + Duration::from_secs(3601);
    assert!(matches!(
        verify_at(&token, secret, past_exp),
        Err(AuthError::ExpiredToken { .. })
    ));
}

#[test]
fn negative_lifetime_is_expired_immediately() {
    let token = irricontrol::issue("alice", b"k", -1).unwrap();
    assert!(matches!(
        irricontrol::verify(&token, b"k"),
        Err(AuthError::ExpiredToken { .. })
    ));
}

#[actix_web::test]
async fn login_then_call_protected_route() {
    let state = AppState::new(
        AppInfo::default(),
        SecurityConfig::new(
            b"e2e-secret".to_vec(),
            5,
            AdminCredentials::new("operator", "pivot-42"),
        ),
    );
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "operator", "password": "pivot-42"}))
        .to_request();
    let login: LoginResponse = read_body_json(call_service(&app, req).await).await;

    let req = TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", login.access_token)))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let me: Value = read_body_json(resp).await;
    assert_eq!(me["sub"], "operator");
    assert_eq!(
        me["exp"].as_i64().unwrap() - me["iat"].as_i64().unwrap(),
        5 * 60
    );
}

#[actix_web::test]
async fn token_from_zero_lifetime_login_is_rejected() {
    let state = AppState::new(
        AppInfo::default(),
        SecurityConfig::new(b"k".to_vec(), 0, AdminCredentials::new("admin", "admin")),
    );
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "admin", "password": "admin"}))
        .to_request();
    let login: LoginResponse = read_body_json(call_service(&app, req).await).await;

    let req = TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", login.access_token)))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED", None).await;
}
