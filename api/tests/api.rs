use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use clap::Parser;
use serde_json::{Value, json};

use nutriguard_api::application::http::server::http_server;
use nutriguard_api::args::Args;

/// Server with default configuration: no inference credential configured.
fn server() -> TestServer {
    let args = Arc::new(Args::parse_from([
        "nutriguard-api",
        "--gemini-api-key",
        "",
    ]));
    let state = http_server::state(args);
    let router = http_server::router(state).expect("router should build");
    TestServer::new(router)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let server = server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn catalogue_endpoint_returns_the_tree_in_order() {
    let server = server();
    let response = server.get("/catalogue").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let categories = body["data"].as_array().unwrap();
    assert_eq!(categories.first().unwrap()["id"], "A");
    assert_eq!(categories.last().unwrap()["id"], "I");
}

#[tokio::test]
async fn diet_rule_lookup_distinguishes_found_and_absent() {
    let server = server();

    let found = server.get("/catalogue/gout/rule").await;
    found.assert_status_ok();
    let body: Value = found.json();
    assert_eq!(body["data"]["id"], "gout");

    // Catalogued but ruleless condition.
    let absent = server.get("/catalogue/hyperuricemia/rule").await;
    absent.assert_status_not_found();
}

#[tokio::test]
async fn disease_info_lookup_distinguishes_found_and_absent() {
    let server = server();

    let found = server.get("/catalogue/gout/info").await;
    found.assert_status_ok();

    let absent = server.get("/catalogue/not_a_condition/info").await;
    absent.assert_status_not_found();
}

#[tokio::test]
async fn ingredient_guide_lists_and_filters() {
    let server = server();

    let all = server.get("/ingredients").await;
    all.assert_status_ok();
    let body: Value = all.json();
    let count = body["data"].as_array().unwrap().len();
    assert!(count > 50);

    let grains = server.get("/ingredients?category=grain").await;
    grains.assert_status_ok();
    let body: Value = grains.json();
    assert!(body["data"].as_array().unwrap().len() < count);
}

#[tokio::test]
async fn ingredient_matcher_endpoint_intersects_condition_lists() {
    let server = server();

    let response = server
        .get("/ingredients/oats/matches?conditions=gout,diabetes_t2,celiac")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["beneficial"], json!(["diabetes_t2"]));
    assert_eq!(body["data"]["harmful"], json!(["gout"]));
}

#[tokio::test]
async fn scan_history_starts_empty() {
    let server = server();

    let response = server.get("/analysis/history").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn analyze_without_credential_is_service_unavailable() {
    let server = server();

    let form = MultipartForm::new()
        .add_text("conditions", "gout,hypertension")
        .add_text("language", "en")
        .add_part(
            "image",
            Part::bytes(vec![0xFF, 0xD8, 0xFF])
                .file_name("food.jpg")
                .mime_type("image/jpeg"),
        );

    let response = server.post("/analysis/image").multipart(form).await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn analyze_without_image_is_bad_request() {
    let server = server();

    let form = MultipartForm::new().add_text("conditions", "gout");
    let response = server.post("/analysis/image").multipart(form).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn care_plan_without_credential_is_service_unavailable() {
    let server = server();

    let response = server
        .post("/care-plan")
        .json(&json!({ "conditions": ["gout"], "language": "en" }))
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn recipes_without_any_image_is_bad_request() {
    let server = server();

    let form = MultipartForm::new()
        .add_text("conditions", "diabetes_t2")
        .add_text("language", "zh");
    let response = server.post("/recipes").multipart(form).await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn unsupported_language_is_bad_request() {
    let server = server();

    let form = MultipartForm::new()
        .add_text("language", "fr")
        .add_part(
            "image",
            Part::bytes(vec![1, 2, 3])
                .file_name("food.jpg")
                .mime_type("image/jpeg"),
        );

    let response = server.post("/analysis/image").multipart(form).await;
    response.assert_status_bad_request();
}
