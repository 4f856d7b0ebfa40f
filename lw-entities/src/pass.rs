use std::fmt;

use time::{Date, OffsetDateTime};

use crate::geo::GeoPoint;

/// Next predicted overpasses of the WRS-2 tile
/// that contains a selected point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassPrediction {
    pub path: u16,
    pub row: u16,
    pub soonest_landsat_8: OffsetDateTime,
    pub soonest_landsat_9: OffsetDateTime,
}

impl PassPrediction {
    pub fn soonest(&self) -> OffsetDateTime {
        self.soonest_landsat_8.min(self.soonest_landsat_9)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneId(String);

impl From<String> for SceneId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for SceneId {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Archived scenes of a point within a date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneQuery {
    pub point: GeoPoint,
    pub start: Date,
    pub end: Date,
    /// Percentage in `0..=100`.
    pub max_cloud_cover: u8,
}
