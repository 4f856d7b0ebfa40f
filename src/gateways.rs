use anyhow::Result;
use lw_gateways::{HttpBackend, Notify};

use crate::config;

pub fn backend(cfg: &config::Backend) -> Result<HttpBackend> {
    log::info!("Use landsat-watch backend at {}", cfg.base_url);
    Ok(HttpBackend::new(cfg.base_url.as_str(), cfg.request_timeout)?)
}

pub fn notification_gateway() -> Notify {
    log::debug!("No subscription endpoint available: notifications are only logged");
    Notify::default()
}
