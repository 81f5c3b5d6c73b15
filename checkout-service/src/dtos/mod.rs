use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::services::razorpay::RazorpayOrder;

/// Body of `POST /api/razorpay/create-order`.
///
/// Both fields are optional at the wire level so a missing field is reported
/// as the same 400 as a falsy one.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in the smallest currency unit (e.g., paise for INR).
    #[serde(default)]
    pub amount: Option<u64>,
    /// Caller's identifier for the order, passed through to Razorpay as-is.
    #[serde(default)]
    pub receipt: Option<String>,
}

impl CreateOrderRequest {
    /// Returns `(amount, receipt)` when both are present and non-zero/non-empty.
    pub fn required_fields(&self) -> Option<(u64, &str)> {
        match (self.amount, self.receipt.as_deref()) {
            (Some(amount), Some(receipt)) if amount > 0 && !receipt.is_empty() => {
                Some((amount, receipt))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    pub receipt: Option<String>,
}

impl From<RazorpayOrder> for CreateOrderResponse {
    fn from(order: RazorpayOrder) -> Self {
        Self {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
            receipt: order.receipt,
        }
    }
}

/// Body of `POST /api/razorpay/verify-payment`, as posted by Razorpay checkout.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub razorpay_order_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub razorpay_payment_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub razorpay_signature: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub verified: bool,
    pub order_id: String,
    pub payment_id: String,
}

/// Envelope returned by `GET /api/test-admin`. Always sent with HTTP 200.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminCheckResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AdminCheckResponse {
    pub const ACCESSIBLE: &'static str = "Admin dashboard is accessible";
    pub const RESPONDED_WITH_ERROR: &'static str = "Admin dashboard responded but with error";
    pub const UNREACHABLE: &'static str = "Cannot connect to admin dashboard";

    pub fn accessible(admin_data: Value) -> Self {
        Self {
            success: true,
            message: Self::ACCESSIBLE,
            admin_data: Some(admin_data),
            status: None,
            error: None,
        }
    }

    pub fn responded_with_error(status: u16) -> Self {
        Self {
            success: false,
            message: Self::RESPONDED_WITH_ERROR,
            admin_data: None,
            status: Some(status),
            error: None,
        }
    }

    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Self::UNREACHABLE,
            admin_data: None,
            status: None,
            error: Some(error.into()),
        }
    }
}
