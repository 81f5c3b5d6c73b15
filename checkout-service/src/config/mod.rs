use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::Secret;
use serde::Deserialize;
use service_core::error::AppError;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub razorpay: RazorpaySettings,
    pub admin_dashboard: AdminDashboardSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RazorpaySettings {
    pub key_id: String,
    pub key_secret: Secret<String>,
    pub api_base_url: String,
    /// Currency sent with every order (e.g. "INR").
    pub currency: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AdminDashboardSettings {
    /// Liveness endpoint of the admin dashboard service.
    pub health_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

/// Built-in defaults, the lowest layer of [`get_configuration`].
fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("razorpay.key_id", "")?
        .set_default("razorpay.key_secret", "")?
        .set_default("razorpay.api_base_url", "https://api.razorpay.com/v1")?
        .set_default("razorpay.currency", "INR")?
        .set_default("admin_dashboard.health_url", "http://localhost:3001/health")?
        .set_default("telemetry.service_name", "checkout-service")?
        .set_default("telemetry.log_level", "info,checkout_service=debug")
}

/// Layered configuration: defaults, optional `configuration` file, `APP_*`
/// environment variables, then the conventional `RAZORPAY_KEY_*` variables.
pub fn get_configuration() -> Result<Settings, AppError> {
    dotenvy::dotenv().ok();

    let settings = defaults()?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins"),
        )
        .set_override_option("razorpay.key_id", std::env::var("RAZORPAY_KEY_ID").ok())?
        .set_override_option(
            "razorpay.key_secret",
            std::env::var("RAZORPAY_KEY_SECRET").ok(),
        )?
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_deserialize_into_settings() {
        let settings: Settings = defaults()
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .expect("defaults should deserialize");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert!(settings.server.allowed_origins.is_empty());
        assert_eq!(settings.razorpay.currency, "INR");
        assert_eq!(settings.razorpay.api_base_url, "https://api.razorpay.com/v1");
        assert!(settings.razorpay.key_secret.expose_secret().is_empty());
        assert_eq!(
            settings.admin_dashboard.health_url,
            "http://localhost:3001/health"
        );
        assert_eq!(settings.telemetry.service_name, "checkout-service");
        assert!(settings.telemetry.otlp_endpoint.is_none());
    }

    #[test]
    fn overrides_replace_defaults() {
        let settings: Settings = defaults()
            .and_then(|builder| builder.set_override("razorpay.key_id", "rzp_live_1"))
            .and_then(|builder| builder.set_override("server.port", 8080))
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .expect("overrides should deserialize");

        assert_eq!(settings.razorpay.key_id, "rzp_live_1");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.razorpay.currency, "INR");
    }
}
