use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("landsat-watch.default.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub backend: Option<Backend>,
    pub map: Option<Map>,
    pub history: Option<History>,
}

impl Config {
    pub fn embedded_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }

    /// Fills all missing values from `defaults`.
    pub fn or(self, defaults: Self) -> Self {
        Self {
            backend: merge(self.backend, defaults.backend, Backend::or),
            map: merge(self.map, defaults.map, Map::or),
            history: merge(self.history, defaults.history, History::or),
        }
    }
}

fn merge<T>(value: Option<T>, default: Option<T>, f: impl FnOnce(T, T) -> T) -> Option<T> {
    match (value, default) {
        (Some(value), Some(default)) => Some(f(value, default)),
        (value, default) => value.or(default),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Backend {
    pub base_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub request_timeout: Option<Duration>,
}

impl Backend {
    fn or(self, defaults: Self) -> Self {
        Self {
            base_url: self.base_url.or(defaults.base_url),
            request_timeout: self.request_timeout.or(defaults.request_timeout),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Map {
    pub provider_api_key: Option<String>,
    pub default_center: Option<LatLng>,
}

impl Map {
    fn or(self, defaults: Self) -> Self {
        Self {
            provider_api_key: self.provider_api_key.or(defaults.provider_api_key),
            default_center: self.default_center.or(defaults.default_center),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct History {
    pub revisit_cycle_days: Option<i64>,
    pub max_cloud_cover: Option<u8>,
}

impl History {
    fn or(self, defaults: Self) -> Self {
        Self {
            revisit_cycle_days: self.revisit_cycle_days.or(defaults.revisit_cycle_days),
            max_cloud_cover: self.max_cloud_cover.or(defaults.max_cloud_cover),
        }
    }
}
