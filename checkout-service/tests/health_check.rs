mod common;

use common::{test_settings, unreachable_url, TestApp};

async fn spawn_app() -> TestApp {
    let nowhere = unreachable_url("").await;
    TestApp::spawn(test_settings(&nowhere, &format!("{}/health", nowhere))).await
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "checkout-service");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "req-42");
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn metrics_endpoint_responds_without_recorder() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response
        .headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}
