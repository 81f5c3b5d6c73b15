mod common;

use common::{test_settings, unreachable_url, TestApp, TEST_KEY_SECRET};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

async fn spawn_app() -> TestApp {
    let nowhere = unreachable_url("").await;
    TestApp::spawn(test_settings(&nowhere, &format!("{}/health", nowhere))).await
}

fn checkout_signature(order_id: &str, payment_id: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(TEST_KEY_SECRET.as_bytes()).unwrap();
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

async fn post_verify(app: &TestApp, body: serde_json::Value) -> reqwest::Response {
    app.client
        .post(format!("{}/api/razorpay/verify-payment", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn valid_signature_is_verified() {
    let app = spawn_app().await;

    let response = post_verify(
        &app,
        json!({
            "razorpay_order_id": "order_1",
            "razorpay_payment_id": "pay_1",
            "razorpay_signature": checkout_signature("order_1", "pay_1"),
        }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "verified": true, "order_id": "order_1", "payment_id": "pay_1" })
    );
}

#[tokio::test]
async fn signature_for_another_payment_is_rejected() {
    let app = spawn_app().await;

    let response = post_verify(
        &app,
        json!({
            "razorpay_order_id": "order_1",
            "razorpay_payment_id": "pay_2",
            "razorpay_signature": checkout_signature("order_1", "pay_1"),
        }),
    )
    .await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid payment signature");
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = spawn_app().await;

    let response = post_verify(&app, json!({ "razorpay_order_id": "order_1" })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation error");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("razorpay_signature"));
}
