use axum::{extract::State, Json};

use crate::{
    dtos::AdminCheckResponse,
    services::{metrics::record_admin_probe, AdminProbe},
    AppState,
};

/// Report whether the admin dashboard is reachable.
///
/// Always answers 200; the outcome is carried by `success` in the body.
pub async fn test_admin(State(state): State<AppState>) -> Json<AdminCheckResponse> {
    let response = match state.admin_dashboard.probe().await {
        Ok(AdminProbe::Healthy(admin_data)) => {
            tracing::info!(url = %state.admin_dashboard.health_url(), "Admin dashboard is accessible");
            record_admin_probe("accessible");
            AdminCheckResponse::accessible(admin_data)
        }
        Ok(AdminProbe::Unhealthy(status)) => {
            tracing::warn!(
                url = %state.admin_dashboard.health_url(),
                status = status.as_u16(),
                "Admin dashboard responded with error status"
            );
            record_admin_probe("error_status");
            AdminCheckResponse::responded_with_error(status.as_u16())
        }
        Err(e) => {
            tracing::warn!(
                url = %state.admin_dashboard.health_url(),
                error = %e,
                "Cannot connect to admin dashboard"
            );
            record_admin_probe("unreachable");
            AdminCheckResponse::unreachable(e.to_string())
        }
    };

    Json(response)
}
