use checkout_service::config::{
    AdminDashboardSettings, RazorpaySettings, ServerSettings, Settings, TelemetrySettings,
};
use checkout_service::startup::Application;
use secrecy::Secret;

pub const TEST_KEY_ID: &str = "rzp_test_key";
pub const TEST_KEY_SECRET: &str = "rzp_test_secret";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

/// Settings pointing the outbound clients at the given stub URLs.
pub fn test_settings(razorpay_base_url: &str, admin_health_url: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            allowed_origins: vec![],
        },
        razorpay: RazorpaySettings {
            key_id: TEST_KEY_ID.to_string(),
            key_secret: Secret::new(TEST_KEY_SECRET.to_string()),
            api_base_url: razorpay_base_url.to_string(),
            currency: "INR".to_string(),
        },
        admin_dashboard: AdminDashboardSettings {
            health_url: admin_health_url.to_string(),
        },
        telemetry: TelemetrySettings {
            service_name: "checkout-service-test".to_string(),
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
    }
}

/// A URL on 127.0.0.1 with nothing listening behind it.
pub async fn unreachable_url(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}

impl TestApp {
    pub async fn spawn(settings: Settings) -> Self {
        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
        }
    }

    pub async fn post_create_order(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/razorpay/create-order", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_test_admin(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/api/test-admin", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
