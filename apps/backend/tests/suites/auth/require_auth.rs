// Integration tests for the bearer-token gate on the protected scope.

use actix_web::http::StatusCode;
use actix_web::test;
use irricontrol::state::AppState;
use serde_json::Value;

use crate::common::assert_problem_details;
use crate::support::auth::{bearer_header, expired_token, issue_test_token};
use crate::support::create_test_app;

const ME: &str = "/api/v1/auth/me";

#[actix_web::test]
async fn valid_token_reaches_handler_with_identity() {
    let state = AppState::for_tests();
    let header = bearer_header("alice", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(ME)
        .insert_header(("Authorization", header))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["sub"], "alice");
    assert!(body["exp"].as_i64().unwrap() > body["iat"].as_i64().unwrap());
}

#[actix_web::test]
async fn lowercase_scheme_is_accepted() {
    let state = AppState::for_tests();
    let token = issue_test_token("alice", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(ME)
        .insert_header(("Authorization", format!("bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn every_failure_kind_yields_the_same_401() {
    let state = AppState::for_tests();
    let good = issue_test_token("alice", &state.security);
    let expired = expired_token("alice", &state.security);
    let other_secret = irricontrol::issue("alice", b"some-other-secret", 60).unwrap();

    let mut tampered = good.clone().into_bytes();
    let mid = good.find('.').unwrap() + 3;
    tampered[mid] = if tampered[mid] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    let app = create_test_app(state).with_prod_routes().build().await;

    let headers: Vec<Option<String>> = vec![
        None,
        Some("Basic YWRtaW46YWRtaW4=".to_string()),
        Some("Bearer ".to_string()),
        Some("Bearer a.b".to_string()),
        Some("Bearer a.b.c.d".to_string()),
        Some("Bearer a*b.c.d".to_string()),
        Some(format!("Bearer {expired}")),
        Some(format!("Bearer {other_secret}")),
        Some(format!("Bearer {tampered}")),
    ];

    let mut details = Vec::new();
    for header in headers {
        let mut req = test::TestRequest::get().uri(ME);
        if let Some(h) = &header {
            req = req.insert_header(("Authorization", h.as_str()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let problem = assert_problem_details(
            resp,
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            Some("Authentication required"),
        )
        .await;
        details.push((problem.title, problem.detail, problem.type_));
    }

    details.dedup();
    assert_eq!(details.len(), 1, "401 bodies must not reveal the failure kind");
}

#[actix_web::test]
async fn unknown_path_under_prefix_is_gated() {
    let app = create_test_app(AppState::for_tests())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/simulations")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED", None).await;
}

#[actix_web::test]
async fn unknown_path_with_valid_token_is_404() {
    let state = AppState::for_tests();
    let header = bearer_header("alice", &state.security);
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri("/api/v1/simulations")
        .insert_header(("Authorization", header))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
