use reqwest::{Client, StatusCode};
use serde_json::Value;
use service_core::observability::TracedClientExt;

/// Outcome of a completed health request against the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminProbe {
    /// 2xx with the decoded JSON body.
    Healthy(Value),
    /// The dashboard answered with a non-success status.
    Unhealthy(StatusCode),
}

/// Client for the admin dashboard's liveness endpoint.
#[derive(Clone)]
pub struct AdminDashboardClient {
    client: Client,
    health_url: String,
}

impl AdminDashboardClient {
    pub fn new(client: Client, health_url: impl Into<String>) -> Self {
        Self {
            client,
            health_url: health_url.into(),
        }
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// GET the health endpoint once.
    ///
    /// Errors cover transport failures and a 2xx body that is not JSON.
    pub async fn probe(&self) -> Result<AdminProbe, reqwest::Error> {
        let response = self.client.traced_get(&self.health_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Ok(AdminProbe::Unhealthy(status));
        }

        let body = response.json::<Value>().await?;
        Ok(AdminProbe::Healthy(body))
    }
}
