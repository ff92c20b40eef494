// Integration tests for the login endpoint.

use actix_web::http::StatusCode;
use actix_web::test;
use irricontrol::routes::auth::LoginResponse;
use irricontrol::state::AppState;
use serde_json::json;

use crate::common::assert_problem_details;
use crate::support::create_test_app;

#[actix_web::test]
async fn login_with_admin_credentials_returns_bearer_token() {
    let state = AppState::for_tests();
    let secret = state.security.jwt_secret.clone();
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "admin", "password": "admin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: LoginResponse = test::read_body_json(resp).await;
    assert_eq!(body.token_type, "bearer");

    let claims = irricontrol::verify(&body.access_token, &secret).expect("token should verify");
    assert_eq!(claims.subject(), "admin");
    let iat = claims.iat.expect("iat is set");
    assert_eq!(claims.exp - iat, 60 * 60);
}

#[actix_web::test]
async fn wrong_password_is_401_with_bearer_challenge() {
    let app = create_test_app(AppState::for_tests())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "admin", "password": "nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(
        resp,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        Some("Invalid username or password"),
    )
    .await;
}

#[actix_web::test]
async fn wrong_username_looks_like_wrong_password() {
    let app = create_test_app(AppState::for_tests())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "root", "password": "admin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let problem =
        assert_problem_details(resp, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", None).await;
    assert_eq!(problem.detail, "Invalid username or password");
}

#[actix_web::test]
async fn malformed_body_is_400() {
    let app = create_test_app(AppState::for_tests())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\": \"admin\"")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", Some("Invalid JSON")).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({"username": "admin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::BAD_REQUEST, "BAD_REQUEST", None).await;
}

#[actix_web::test]
async fn login_is_not_behind_the_gate() {
    let app = create_test_app(AppState::for_tests())
        .with_prod_routes()
        .build()
        .await;

    // No Authorization header, garbage one too: login must still be reachable
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .set_json(json!({"username": "admin", "password": "admin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
