use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Fails if called twice.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("metrics handle already initialized"))?;

    Ok(())
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count an order-creation attempt by outcome (`created`, `invalid`, `failed`).
pub fn record_order(outcome: &'static str) {
    counter!("checkout_orders_total", "outcome" => outcome).increment(1);
}

/// Count an admin dashboard probe by outcome
/// (`accessible`, `error_status`, `unreachable`).
pub fn record_admin_probe(outcome: &'static str) {
    counter!("checkout_admin_probe_total", "outcome" => outcome).increment(1);
}

/// Count a payment signature check (`verified`, `rejected`).
pub fn record_payment_verification(outcome: &'static str) {
    counter!("checkout_payment_verifications_total", "outcome" => outcome).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_metrics_installs_once() {
        init_metrics().expect("first install succeeds");
        assert!(init_metrics().is_err());

        record_order("created");
        assert!(!get_metrics().contains("not initialized"));
    }
}
