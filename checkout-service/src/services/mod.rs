pub mod admin_dashboard;
pub mod metrics;
pub mod razorpay;

pub use admin_dashboard::{AdminDashboardClient, AdminProbe};
pub use metrics::{get_metrics, init_metrics};
pub use razorpay::{GatewayError, RazorpayClient};
