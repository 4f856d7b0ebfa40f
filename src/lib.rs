//! landsat-watch: pick a point on a map, learn when Landsat 8 and 9
//! pass over it next, subscribe to overpass alerts, review the
//! historical overpasses and drape processed images over the map.
//!
//! The map itself is provided by the host through
//! [`lw_core::map::MapWidget`].

use std::path::Path;

use anyhow::Result;
use lw_core::{map::MapWidget, session::MapSession};
use lw_gateways::{HttpBackend, Notify};

pub mod app;
pub mod config;
pub mod gateways;

pub use self::{app::App, config::Config};

const DEFAULT_LOG_FILTER: &str = "info";

/// Logs to stderr, filtered by `RUST_LOG` (defaults to `info`).
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Loads the configuration and wires `map` with the HTTP backend.
pub fn bootstrap<M, P>(map: M, config_file: Option<P>) -> Result<App<M, HttpBackend, Notify>>
where
    M: MapWidget + Send,
    P: AsRef<Path>,
{
    if let Err(err) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {err}");
    }
    let cfg = Config::try_load_from_file_or_default(config_file)?;
    log::debug!("{cfg:?}");
    let backend = gateways::backend(&cfg.backend)?;
    let session = MapSession::new(map, cfg.session_settings());
    Ok(App::new(session, backend, gateways::notification_gateway()))
}
