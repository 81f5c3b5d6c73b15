//! Razorpay payment handlers.
//!
//! Order creation proxies to the Razorpay Orders API; payment verification
//! checks the signature Razorpay checkout hands back to the browser.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;
use validator::Validate;

use crate::{
    dtos::{CreateOrderRequest, CreateOrderResponse, VerifyPaymentRequest, VerifyPaymentResponse},
    services::{
        metrics::{record_order, record_payment_verification},
        razorpay::PaymentVerification,
    },
    AppState,
};

const ORDER_FIELDS_REQUIRED: &str = "Amount and receipt are required";
const ORDER_FAILED: &str = "Failed to create order";
const INVALID_SIGNATURE: &str = "Invalid payment signature";

/// Create a Razorpay order for `amount` (smallest currency unit) and `receipt`.
///
/// Missing or falsy fields are rejected with 400 before Razorpay is contacted.
/// Anything else is forwarded; a failure of the Razorpay call (including a
/// rejection of the receipt) is logged and reported as a generic 500.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|_| record_order("invalid"))?;

    let Some((amount, receipt)) = payload.required_fields() else {
        record_order("invalid");
        return Err(AppError::bad_request(ORDER_FIELDS_REQUIRED));
    };

    tracing::info!(amount, receipt = %receipt, "Creating Razorpay order");

    let order = state
        .razorpay
        .create_order(amount, receipt)
        .await
        .map_err(|e| {
            record_order("failed");
            AppError::upstream(ORDER_FAILED, e)
        })?;

    record_order("created");

    Ok(Json(order.into()))
}

/// Verify the signature returned by Razorpay checkout.
pub async fn verify_payment(
    State(state): State<AppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<VerifyPaymentResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let verification = PaymentVerification {
        razorpay_order_id: &payload.razorpay_order_id,
        razorpay_payment_id: &payload.razorpay_payment_id,
        razorpay_signature: &payload.razorpay_signature,
    };

    if !state.razorpay.verify_payment_signature(&verification) {
        tracing::warn!(
            order_id = %payload.razorpay_order_id,
            payment_id = %payload.razorpay_payment_id,
            "Payment signature verification failed"
        );
        record_payment_verification("rejected");
        return Err(AppError::bad_request(INVALID_SIGNATURE));
    }

    tracing::info!(
        order_id = %payload.razorpay_order_id,
        payment_id = %payload.razorpay_payment_id,
        "Payment signature verified"
    );
    record_payment_verification("verified");

    Ok(Json(VerifyPaymentResponse {
        verified: true,
        order_id: payload.razorpay_order_id,
        payment_id: payload.razorpay_payment_id,
    }))
}
