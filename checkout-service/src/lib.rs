pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use config::Settings;
use services::{AdminDashboardClient, RazorpayClient};

/// Shared application state. Cloned per request; holds no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub razorpay: RazorpayClient,
    pub admin_dashboard: AdminDashboardClient,
}

impl AppState {
    /// Build both outbound clients over one shared connection pool.
    pub fn new(settings: Settings) -> Self {
        let http = reqwest::Client::new();

        Self {
            razorpay: RazorpayClient::new(http.clone(), settings.razorpay.clone()),
            admin_dashboard: AdminDashboardClient::new(
                http,
                settings.admin_dashboard.health_url.clone(),
            ),
            settings,
        }
    }
}
