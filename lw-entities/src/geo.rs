use std::{fmt, str::FromStr};

use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordRangeError {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
}

pub fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

pub fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

/// A geographical location on a (flat) map in decimal degrees.
///
/// Unlike a fixed-point representation the degrees are stored as
/// given, i.e. a point survives a round trip through its textual
/// representation without loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordRangeError> {
        if !is_valid_lat_deg(lat) {
            return Err(CoordRangeError::Latitude);
        }
        if !is_valid_lng_deg(lng) {
            return Err(CoordRangeError::Longitude);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum GeoPointParseError {
    #[error("Expected 'lat,lng'")]
    Format,
    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseFloatError),
    #[error(transparent)]
    Range(#[from] CoordRangeError),
}

impl FromStr for GeoPoint {
    type Err = GeoPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or(GeoPointParseError::Format)?;
        let lat = lat.trim().parse()?;
        let lng = lng.trim().parse()?;
        Ok(Self::try_from_lat_lng_deg(lat, lng)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Bounding rectangle is invalid")]
pub struct InvalidBoundsError;

/// Rectangle a ground overlay is pinned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayBounds {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl OverlayBounds {
    /// Requires `south < north` and `west < east`.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, InvalidBoundsError> {
        let bounds = Self {
            south,
            west,
            north,
            east,
        };
        if bounds.is_valid() {
            Ok(bounds)
        } else {
            Err(InvalidBoundsError)
        }
    }

    /// Bypasses validation, e.g. for data received from a remote
    /// peer that is validated later on.
    pub const fn new_unchecked(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_lat_deg(self.south)
            && is_valid_lat_deg(self.north)
            && is_valid_lng_deg(self.west)
            && is_valid_lng_deg(self.east)
            && self.south < self.north
            && self.west < self.east
    }

    pub const fn south(&self) -> f64 {
        self.south
    }

    pub const fn west(&self) -> f64 {
        self.west
    }

    pub const fn north(&self) -> f64 {
        self.north
    }

    pub const fn east(&self) -> f64 {
        self.east
    }

    pub fn center(&self) -> Option<GeoPoint> {
        GeoPoint::try_from_lat_lng_deg(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
        .ok()
    }

    pub fn contains_point(&self, pt: GeoPoint) -> bool {
        debug_assert!(self.is_valid());
        (self.south..=self.north).contains(&pt.lat()) && (self.west..=self.east).contains(&pt.lng())
    }
}

impl fmt::Display for OverlayBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.south, self.west, self.north, self.east
        )
    }
}
