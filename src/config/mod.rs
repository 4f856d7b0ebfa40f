use anyhow::{anyhow, Result};
use lw_core::session::SessionSettings;
use lw_entities::geo::GeoPoint;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "landsat-watch.toml";

const ENV_NAME_BACKEND_URL: &str = "LANDSAT_WATCH_BACKEND_URL";
const ENV_NAME_MAPS_API_KEY: &str = "MAPS_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub map: Map,
    pub history: History,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let defaults = raw::Config::embedded_default()?;
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)?.or(defaults),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(defaults)
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(base_url) = env::var(ENV_NAME_BACKEND_URL) {
            cfg.backend.base_url = base_url;
        }
        if let Ok(api_key) = env::var(ENV_NAME_MAPS_API_KEY) {
            cfg.map.provider_api_key = Some(api_key);
        }
        Ok(cfg)
    }

    pub const fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            default_center: self.map.default_center,
            revisit_cycle_days: self.history.revisit_cycle_days,
            max_cloud_cover: self.history.max_cloud_cover,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Backend {
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone)]
pub struct Map {
    /// Key of the map tile provider.
    pub provider_api_key: Option<String>,
    pub default_center: GeoPoint,
}

impl std::fmt::Debug for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field(
                "provider_api_key",
                &self.provider_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("default_center", &self.default_center)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct History {
    pub revisit_cycle_days: i64,
    /// Percentage
    pub max_cloud_cover: u8,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            map,
            history,
        } = from;

        let raw::Backend {
            base_url,
            request_timeout,
        } = backend.unwrap_or_default();
        let base_url = base_url.ok_or_else(|| anyhow!("Missing backend base URL"))?;
        if base_url.trim().is_empty() {
            return Err(anyhow!("Empty backend base URL"));
        }
        let request_timeout =
            request_timeout.ok_or_else(|| anyhow!("Missing backend request timeout"))?;
        if request_timeout.is_zero() {
            return Err(anyhow!("The backend request timeout must not be zero"));
        }
        let backend = Backend {
            base_url,
            request_timeout,
        };

        let raw::Map {
            provider_api_key,
            default_center,
        } = map.unwrap_or_default();
        let raw::LatLng { lat, lng } =
            default_center.ok_or_else(|| anyhow!("Missing default map center"))?;
        let default_center = GeoPoint::try_from_lat_lng_deg(lat, lng)
            .map_err(|err| anyhow!("Invalid default map center: {err}"))?;
        let map = Map {
            provider_api_key: provider_api_key.filter(|key| !key.trim().is_empty()),
            default_center,
        };

        let raw::History {
            revisit_cycle_days,
            max_cloud_cover,
        } = history.unwrap_or_default();
        let revisit_cycle_days =
            revisit_cycle_days.ok_or_else(|| anyhow!("Missing revisit cycle"))?;
        if revisit_cycle_days <= 0 {
            return Err(anyhow!(
                "The revisit cycle must be a positive number of days (got {revisit_cycle_days})"
            ));
        }
        let max_cloud_cover =
            max_cloud_cover.ok_or_else(|| anyhow!("Missing max. cloud cover"))?;
        if max_cloud_cover > 100 {
            return Err(anyhow!(
                "The max. cloud cover must be a percentage (got {max_cloud_cover})"
            ));
        }
        let history = History {
            revisit_cycle_days,
            max_cloud_cover,
        };

        Ok(Self {
            backend,
            map,
            history,
        })
    }
}
