// Open endpoints: root, health and version need no credentials.

use actix_web::http::StatusCode;
use actix_web::test;
use irricontrol::state::{AppInfo, AppState, SecurityConfig};
use serde_json::{json, Value};

use crate::support::create_test_app;

fn state_named(name: &str, version: &str, prefix: &str) -> AppState {
    AppState::new(
        AppInfo {
            name: name.to_string(),
            version: version.to_string(),
            api_prefix: prefix.to_string(),
        },
        SecurityConfig::for_tests(),
    )
}

#[actix_web::test]
async fn root_greets_with_app_name() {
    let app = create_test_app(state_named("IrriControl API", "1.2.3", "/api/v1"))
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Welcome to IrriControl API!"}));
}

#[actix_web::test]
async fn health_answers_get_and_head() {
    let app = create_test_app(AppState::for_tests())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "ok"}));

    let resp = test::call_service(
        &app,
        test::TestRequest::default()
            .method(actix_web::http::Method::HEAD)
            .uri("/api/v1/health")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn version_reports_name_and_version() {
    let app = create_test_app(state_named("Pivot", "9.9.9", "/api/v1"))
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/version").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"name": "Pivot", "version": "9.9.9"}));
}

#[actix_web::test]
async fn custom_prefix_moves_every_route() {
    let app = create_test_app(state_named("IrriControl API", "0.1.0", "/api/v2"))
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v2/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v2/auth/me").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn static_files_are_served_without_credentials() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("imagens")).unwrap();
    std::fs::write(root.path().join("imagens/x.png"), b"not really a png").unwrap();

    let app = create_test_app(AppState::for_tests())
        .with_static_dir(root.path())
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/static/imagens/x.png")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/png");
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"not really a png");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/static/imagens/missing.png")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
