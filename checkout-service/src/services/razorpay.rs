//! Razorpay payment gateway client.
//!
//! Wraps the Orders API for order creation and the checkout signature
//! check used to confirm a payment.

use crate::config::RazorpaySettings;
use hmac::{Hmac, Mac};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use service_core::observability::TracedClientExt;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Razorpay client for interacting with the Razorpay API.
#[derive(Clone)]
pub struct RazorpayClient {
    client: Client,
    config: RazorpaySettings,
}

/// Why an order could not be created.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Razorpay credentials not configured")]
    NotConfigured,

    #[error("Razorpay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Razorpay rejected request ({status}): {code} - {description}")]
    Rejected {
        status: StatusCode,
        code: String,
        description: String,
    },

    #[error("Unexpected Razorpay response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Request body for `POST /orders`.
#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    /// Amount in smallest currency unit (paise for INR).
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
}

/// Order object returned by Razorpay. Only the fields this service relays
/// are required; `status` is logged.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Razorpay API error response.
#[derive(Debug, Deserialize)]
struct RazorpayError {
    error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorDetail {
    code: String,
    description: String,
}

/// Fields posted back by Razorpay checkout after a payment.
#[derive(Debug)]
pub struct PaymentVerification<'a> {
    pub razorpay_order_id: &'a str,
    pub razorpay_payment_id: &'a str,
    pub razorpay_signature: &'a str,
}

impl RazorpayClient {
    pub fn new(client: Client, config: RazorpaySettings) -> Self {
        Self { client, config }
    }

    /// Check if Razorpay is configured (credentials are set).
    pub fn is_configured(&self) -> bool {
        !self.config.key_id.is_empty() && !self.config.key_secret.expose_secret().is_empty()
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Create a new order in Razorpay.
    ///
    /// `amount` is in the smallest currency unit; the currency is the one
    /// configured for this service.
    pub async fn create_order(
        &self,
        amount: u64,
        receipt: &str,
    ) -> Result<RazorpayOrder, GatewayError> {
        if !self.is_configured() {
            return Err(GatewayError::NotConfigured);
        }

        let body = CreateOrderBody {
            amount,
            currency: &self.config.currency,
            receipt,
        };

        let url = format!("{}/orders", self.config.api_base_url.trim_end_matches('/'));

        let response = self
            .client
            .traced_post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, "Razorpay create_order response");

        if status.is_success() {
            let order: RazorpayOrder = serde_json::from_str(&body)?;
            tracing::info!(
                order_id = %order.id,
                amount = order.amount,
                currency = %order.currency,
                status = ?order.status,
                "Razorpay order created"
            );
            Ok(order)
        } else {
            let detail = serde_json::from_str::<RazorpayError>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| RazorpayErrorDetail {
                    code: "UNKNOWN".to_string(),
                    description: body,
                });
            Err(GatewayError::Rejected {
                status,
                code: detail.code,
                description: detail.description,
            })
        }
    }

    /// Verify the checkout signature:
    /// `hex(HMAC-SHA256(order_id + "|" + payment_id, key_secret))`.
    ///
    /// The comparison is constant time. A signature that is not valid hex
    /// never verifies.
    pub fn verify_payment_signature(&self, verification: &PaymentVerification<'_>) -> bool {
        let Ok(signature) = hex::decode(verification.razorpay_signature) else {
            return false;
        };

        let Ok(mut mac) =
            HmacSha256::new_from_slice(self.config.key_secret.expose_secret().as_bytes())
        else {
            return false;
        };
        mac.update(verification.razorpay_order_id.as_bytes());
        mac.update(b"|");
        mac.update(verification.razorpay_payment_id.as_bytes());

        mac.verify_slice(&signature).is_ok()
    }
}
